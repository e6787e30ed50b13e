//! Domain models.

mod label_definition;
mod label_document;
mod repository_path;
mod sync_report;
mod trigger_kind;

pub use label_definition::LabelDefinition;
pub use label_document::{CategoryGroupedDocument, LabelCategory};
pub use repository_path::{RepositoryPath, RepositoryPathError};
pub use sync_report::SyncReport;
pub use trigger_kind::{TriggerKind, TriggerKindError};

//! Label synchronization core.
//!
//! Every pipeline stage is a use case registered in [`CoreModule`], so that
//! stages can be swapped for mocks in tests.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod random;
pub mod summary;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result, SyncStage};
pub use random::{ChaChaRandomSource, RandomSource};
use shaku::module;
pub use summary::{SyncOutcome, SyncSummary};
use use_cases::{
    document::{
        fetch_label_document::FetchLabelDocument, flatten_label_document::FlattenLabelDocument,
        validate_label_document::ValidateLabelDocument,
    },
    sync::{
        apply_jitter::ApplyJitter, report_sync_summary::ReportSyncSummary,
        run_label_sync::RunLabelSync, synchronize_labels::SynchronizeLabels,
    },
};

module! {
    pub CoreModule {
        components = [
            FetchLabelDocument, ValidateLabelDocument, FlattenLabelDocument,
            ApplyJitter, SynchronizeLabels, ReportSyncSummary, RunLabelSync
        ],
        providers = []
    }
}

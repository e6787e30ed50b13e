use labelsync_models::{CategoryGroupedDocument, LabelDefinition};
use shaku::{Component, Interface};
use tracing::debug;

use crate::{DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait FlattenLabelDocumentInterface: Interface {
    /// Concatenate every category in document order.
    fn run(&self, document: &CategoryGroupedDocument) -> Result<Vec<LabelDefinition>>;
}

#[derive(Component)]
#[shaku(interface = FlattenLabelDocumentInterface)]
pub(crate) struct FlattenLabelDocument;

impl FlattenLabelDocumentInterface for FlattenLabelDocument {
    #[tracing::instrument(skip_all)]
    fn run(&self, document: &CategoryGroupedDocument) -> Result<Vec<LabelDefinition>> {
        let labels: Vec<LabelDefinition> = document
            .categories()
            .iter()
            .flat_map(|category| category.labels.iter().cloned())
            .collect();

        if labels.is_empty() {
            return Err(DomainError::EmptyResultError {
                category_count: document.categories().len(),
            });
        }

        debug!(
            categories = document.categories().len(),
            labels = labels.len(),
            "Flattened label document"
        );

        Ok(labels)
    }
}

use async_trait::async_trait;

use crate::{types::GhLabel, Result};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List every label of a repository.
    async fn labels_list(&self, owner: &str, name: &str) -> Result<Vec<GhLabel>>;
    /// Create a label on a repository.
    async fn labels_create(&self, owner: &str, name: &str, label: &GhLabel) -> Result<()>;
    /// Update a label, identified by its current name.
    ///
    /// `label.name` becomes the new name.
    async fn labels_update(
        &self,
        owner: &str,
        name: &str,
        current_name: &str,
        label: &GhLabel,
    ) -> Result<()>;
    /// Delete a label from a repository.
    async fn labels_delete(&self, owner: &str, name: &str, label_name: &str) -> Result<()>;
}

//! Null driver for GH API.
//!
//! Reports an empty target repository and accepts every write without
//! sending anything, which makes it usable for dry runs.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use labelsync_ghapi_interface::{types::GhLabel, ApiService, Result};

/// Null API service.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn labels_list(&self, owner: &str, name: &str) -> Result<Vec<GhLabel>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self))]
    async fn labels_create(&self, owner: &str, name: &str, label: &GhLabel) -> Result<()> {
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn labels_update(
        &self,
        owner: &str,
        name: &str,
        current_name: &str,
        label: &GhLabel,
    ) -> Result<()> {
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn labels_delete(&self, owner: &str, name: &str, label_name: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_everything() {
        let service = NullApiService::new();
        let label = GhLabel {
            name: "bug".into(),
            color: "d73a4a".into(),
            description: None,
        };

        assert!(service.labels_list("owner", "name").await.unwrap().is_empty());
        service.labels_create("owner", "name", &label).await.unwrap();
        service
            .labels_update("owner", "name", "bug", &label)
            .await
            .unwrap();
        service.labels_delete("owner", "name", "bug").await.unwrap();
    }
}

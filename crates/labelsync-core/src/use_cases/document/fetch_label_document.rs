use async_trait::async_trait;
use shaku::{Component, Interface};
use tracing::debug;

use crate::{CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait FetchLabelDocumentInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, url: &str) -> Result<String>;
}

#[derive(Component)]
#[shaku(interface = FetchLabelDocumentInterface)]
pub(crate) struct FetchLabelDocument;

#[async_trait]
impl FetchLabelDocumentInterface for FetchLabelDocument {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, url: &str) -> Result<String> {
        let content = ctx
            .source_service
            .fetch(url)
            .await
            .map_err(|e| DomainError::FetchError {
                url: url.into(),
                source: e,
            })?;

        debug!(bytes = content.len(), "Fetched label document");
        Ok(content)
    }
}

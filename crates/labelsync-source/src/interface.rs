use async_trait::async_trait;

use crate::Result;

/// Label document source interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SourceService: Send + Sync {
    /// Fetch the raw document located at `url`.
    async fn fetch(&self, url: &str) -> Result<String>;
}

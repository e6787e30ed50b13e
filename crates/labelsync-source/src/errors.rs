use thiserror::Error;

/// Source error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Could not reach '{}': {}", url, source)]
    RequestError { url: String, source: reqwest::Error },

    #[error("Request to '{}' timed out after {}s", url, timeout)]
    TimeoutError { url: String, timeout: u64 },

    #[error("Request to '{}' failed with HTTP status {}", url, status)]
    StatusError { url: String, status: u16 },
}

/// Result alias for `SourceError`.
pub type Result<T, E = SourceError> = core::result::Result<T, E>;

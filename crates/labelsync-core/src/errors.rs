//! Core errors.

use std::fmt::Display;

use labelsync_ghapi_interface::ApiError;
use labelsync_models::SyncReport;
use labelsync_source::SourceError;
use thiserror::Error;

/// Pipeline stage, used to qualify failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStage {
    Fetch,
    Parse,
    Schema,
    Flatten,
    Sync,
}

impl SyncStage {
    pub fn to_str(&self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Parse => "parse",
            Self::Schema => "schema",
            Self::Flatten => "flatten",
            Self::Sync => "sync",
        }
    }
}

impl Display for SyncStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Core error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Could not fetch label document from '{url}': {source}")]
    FetchError { url: String, source: SourceError },

    #[error("Malformed label document: {reason}")]
    ParseError {
        reason: String,
        source: Option<serde_yaml::Error>,
    },

    #[error("Invalid label document: {reason}")]
    SchemaError { reason: String },

    #[error("{}", empty_result_message(.category_count))]
    EmptyResultError { category_count: usize },

    #[error("Label synchronization failed while trying to {operation} ({partial}): {source}")]
    SyncError {
        operation: String,
        source: ApiError,
        partial: SyncReport,
    },

    /// Wraps [`labelsync_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError { source: ApiError },
}

fn empty_result_message(category_count: &usize) -> String {
    if *category_count == 0 {
        "Label document has no categories".into()
    } else {
        format!("Label document has {category_count} categories, all empty")
    }
}

impl DomainError {
    pub fn schema<T: Into<String>>(reason: T) -> Self {
        Self::SchemaError {
            reason: reason.into(),
        }
    }

    pub fn stage(&self) -> SyncStage {
        match self {
            Self::FetchError { .. } => SyncStage::Fetch,
            Self::ParseError { .. } => SyncStage::Parse,
            Self::SchemaError { .. } => SyncStage::Schema,
            Self::EmptyResultError { .. } => SyncStage::Flatten,
            Self::SyncError { .. } | Self::ApiError { .. } => SyncStage::Sync,
        }
    }

    /// Counts of the writes applied before a synchronization failure.
    pub fn partial_report(&self) -> Option<SyncReport> {
        match self {
            Self::SyncError { partial, .. } => Some(*partial),
            _ => None,
        }
    }
}

impl From<ApiError> for DomainError {
    fn from(e: ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T, E = DomainError> = core::result::Result<T, E>;

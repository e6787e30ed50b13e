use labelsync_ghapi_interface::ApiError;

/// GitHub adapter error.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid GitHub API root URL '{}': {}", url, reason)]
    InvalidRootUrl { url: String, reason: String },

    #[error("GitHub API token contains invalid header characters")]
    InvalidToken,

    #[error("Label '{}' not found on repository {}", label, repository_path)]
    LabelNotFound {
        label: String,
        repository_path: String,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::LabelNotFound {
                label,
                repository_path,
            } => ApiError::LabelNotFound {
                label,
                repository_path,
            },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}

//! Validation utilities.

use labelsync_config::{ApiDriver, Config};
use labelsync_models::{RepositoryPath, TriggerKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config, writes_labels: bool) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(errors: &mut Vec<String>, name: &str) {
        errors.push(format!("  - Missing env. var.: {name}"));
    }

    #[inline]
    fn _invalid(errors: &mut Vec<String>, name: &str, value: &str) {
        errors.push(format!("  - Invalid env. var.: {name} ({value:?})"));
    }

    let mut errors = Vec::new();

    // Check source configuration
    if config.source.url.trim().is_empty() {
        _missing(&mut errors, "LABELSYNC_SOURCE_URL");
    }
    if config.source.timeout == 0 {
        _invalid(&mut errors, "LABELSYNC_SOURCE_TIMEOUT", "0");
    }

    // Check sync defaults
    if !config.sync.repository.is_empty()
        && RepositoryPath::new(&config.sync.repository).is_err()
    {
        _invalid(
            &mut errors,
            "LABELSYNC_REPOSITORY",
            &config.sync.repository,
        );
    }
    if !config.sync.trigger.is_empty() && config.sync.trigger.parse::<TriggerKind>().is_err() {
        _invalid(&mut errors, "LABELSYNC_TRIGGER", &config.sync.trigger);
    }

    // Check API credentials, only needed to write labels
    if writes_labels
        && config.api.driver == ApiDriver::GitHub
        && config.api.github.token.is_empty()
    {
        _missing(&mut errors, "LABELSYNC_API_GITHUB_TOKEN");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError {
            errors: errors.join("\n"),
        })
    }
}

/// Validate configuration for a command, `writes_labels` being set for `sync`.
pub fn validate_configuration(
    config: &Config,
    writes_labels: bool,
) -> Result<(), ValidationError> {
    validate_env_vars(config, writes_labels)
}

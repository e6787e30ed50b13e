//! Log configuration.
//!
//! Logs go to stderr so that command output on stdout stays parseable.

use std::str::FromStr;

use labelsync_config::Config;
use thiserror::Error;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_error::ErrorLayer;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

const DEFAULT_ENV_CONFIG: &str = "info,labelsync=debug,labelsync_core=debug";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not install the global tracing subscriber: {source}")]
    SetGlobalDefaultError {
        source: tracing::dispatcher::SetGlobalDefaultError,
    },

    #[error("Could not bridge `log` records to tracing: {source}")]
    LogTracerError {
        source: tracing::log::SetLoggerError,
    },

    #[error("Invalid log filter '{configuration}': {source}")]
    EnvFilterError {
        configuration: String,
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Build the log filter from a `RUST_LOG`-like directive string.
fn build_env_filter(directives: Option<String>) -> Result<EnvFilter, LoggingError> {
    let configuration = directives
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENV_CONFIG.to_string());

    EnvFilter::from_str(&configuration).map_err(|e| LoggingError::EnvFilterError {
        configuration,
        source: e,
    })
}

/// Install the global subscriber.
///
/// Human-readable tree output by default, bunyan JSON when
/// `LABELSYNC_LOGGING_USE_BUNYAN` is set.
pub fn configure_logging(config: &Config) -> Result<(), LoggingError> {
    LogTracer::init().map_err(|e| LoggingError::LogTracerError { source: e })?;

    let filter_layer = build_env_filter(std::env::var("RUST_LOG").ok())?;
    let use_bunyan = config.logging.use_bunyan;

    let tree_layer = (!use_bunyan).then(|| {
        HierarchicalLayer::new(2)
            .with_targets(true)
            .with_bracketed_fields(true)
    });
    let json_layers = use_bunyan.then(|| {
        (
            JsonStorageLayer,
            BunyanFormattingLayer::new(format!("labelsync-{}", config.version), std::io::stderr),
        )
    });
    let (json_storage_layer, bunyan_layer) = json_layers.unzip();

    let subscriber = tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(tree_layer)
        .with(filter_layer)
        .with(json_storage_layer)
        .with(bunyan_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::SetGlobalDefaultError { source: e })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter() {
        let default = build_env_filter(None).unwrap();
        let blank = build_env_filter(Some(" ".into())).unwrap();
        assert_eq!(default.to_string(), blank.to_string());
    }

    #[test]
    fn custom_filter() {
        assert!(build_env_filter(Some("warn,labelsync_core=trace".into())).is_ok());
    }

    #[test]
    fn invalid_filter() {
        assert!(matches!(
            build_env_filter(Some("labelsync=notalevel".into())),
            Err(LoggingError::EnvFilterError { configuration, .. })
                if configuration == "labelsync=notalevel"
        ));
    }
}

//! Sentry integration.

use std::{future::Future, str::FromStr};

use labelsync_config::Config;
use sentry::{integrations::debug_images::DebugImagesIntegration, types::Dsn, ClientOptions};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SentryError {
    #[error("Invalid Sentry DSN '{}': {}", url, source)]
    InvalidDsn {
        url: String,
        source: sentry::types::ParseDsnError,
    },
}

/// Configure Sentry integration by wrapping a function.
pub async fn with_sentry_configuration<T, Fut, E>(config: &Config, func: T) -> Result<(), E>
where
    T: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: From<SentryError>,
{
    let _guard = {
        if config.sentry.url.is_empty() {
            None
        } else {
            info!("Sentry integration enabled.");

            let dsn = Dsn::from_str(&config.sentry.url).map_err(|e| SentryError::InvalidDsn {
                url: config.sentry.url.clone(),
                source: e,
            })?;

            let mut options =
                ClientOptions::new().add_integration(DebugImagesIntegration::default());

            options.dsn = Some(dsn);
            options.default_integrations = true;
            options.in_app_exclude.push("reqwest");
            options.in_app_exclude.push("sentry");
            options.in_app_exclude.push("tokio");
            options.release = Some(config.version.to_string().into());
            options.send_default_pii = false;
            options.attach_stacktrace = true;
            options.traces_sample_rate = config.sentry.traces_sample_rate;
            options.debug = false;

            Some(sentry::init(options))
        }
    };

    func().await
}

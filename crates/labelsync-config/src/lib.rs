//! Config module.

mod drivers;

use std::{
    env,
    str::FromStr,
    time::{SystemTime, UNIX_EPOCH},
};

pub use drivers::{ApiDriver, DriverError};
use thiserror::Error;

/// Canonical location of the label taxonomy.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/labelsync/labels/main/labels.yml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {source}")]
    DriverError { name: String, source: DriverError },
}

#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Label document URL.
    pub url: String,
    /// Fetch timeout (in seconds).
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Upper bound of the scheduled jitter window (in seconds).
    pub jitter_window: u64,
    /// Delete target labels missing from the source.
    pub prune: bool,
    /// Explicit trigger kind, empty when it should be derived.
    pub trigger: String,
    /// CI event name, used to derive the trigger kind.
    pub event_name: String,
    /// Actor who triggered the run.
    pub actor: String,
    /// Default target repository.
    pub repository: String,
    /// Markdown summary file, empty when disabled.
    pub step_summary_path: String,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry URL.
    pub url: String,
    /// Traces sample rate (between 0 and 1) for Sentry
    pub traces_sample_rate: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Label synchronization configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source options.
    pub source: SourceConfig,
    /// Synchronization options.
    pub sync: SyncConfig,
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Sentry options.
    pub sentry: SentryConfig,
    /// Seed for the jitter random source.
    pub random_seed: u64,
    /// Program version.
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, ConfigError> {
        Self::from_lookup(version, |name| env::var(name).ok())
    }

    /// Create configuration from defaults only, ignoring the environment.
    pub fn from_defaults(version: String) -> Config {
        let vars = EnvReader {
            lookup: |_: &str| -> Option<String> { None },
        };
        Self::build(version, &vars, ApiDriver::GitHub)
    }

    pub fn from_defaults_no_version() -> Self {
        Self::from_defaults("0.0.0".into())
    }

    fn from_lookup<F>(version: String, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = EnvReader { lookup };
        let api_driver = match vars.get("LABELSYNC_API_DRIVER").filter(|v| !v.is_empty()) {
            Some(driver) => {
                ApiDriver::from_str(&driver).map_err(|e| ConfigError::DriverError {
                    name: "LABELSYNC_API_DRIVER".into(),
                    source: e,
                })?
            }
            None => ApiDriver::GitHub,
        };

        Ok(Self::build(version, &vars, api_driver))
    }

    fn build<F>(version: String, vars: &EnvReader<F>, api_driver: ApiDriver) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            source: SourceConfig {
                url: vars.to_str("LABELSYNC_SOURCE_URL", DEFAULT_SOURCE_URL),
                timeout: vars.to_u64("LABELSYNC_SOURCE_TIMEOUT", 30),
            },
            sync: SyncConfig {
                jitter_window: vars.to_u64("LABELSYNC_JITTER_WINDOW", 600),
                prune: vars.to_flag("LABELSYNC_PRUNE", true),
                trigger: vars.to_str("LABELSYNC_TRIGGER", ""),
                event_name: vars.to_str("GITHUB_EVENT_NAME", ""),
                actor: vars.to_str_or("LABELSYNC_ACTOR", "GITHUB_ACTOR", "unknown"),
                repository: vars.to_str_or("LABELSYNC_REPOSITORY", "GITHUB_REPOSITORY", ""),
                step_summary_path: vars.to_str_or(
                    "LABELSYNC_STEP_SUMMARY",
                    "GITHUB_STEP_SUMMARY",
                    "",
                ),
            },
            api: ApiConfig {
                driver: api_driver,
                github: ApiGitHubConfig {
                    connect_timeout: vars.to_u64("LABELSYNC_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: vars.to_str("LABELSYNC_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    token: vars.to_str_or("LABELSYNC_API_GITHUB_TOKEN", "GITHUB_TOKEN", ""),
                },
            },
            logging: LoggingConfig {
                use_bunyan: vars.to_bool("LABELSYNC_LOGGING_USE_BUNYAN", false),
            },
            sentry: SentryConfig {
                url: vars.to_str("LABELSYNC_SENTRY_URL", ""),
                traces_sample_rate: vars.to_f32("LABELSYNC_SENTRY_TRACES_SAMPLE_RATE", 0.0),
            },
            random_seed: vars.to_u64("LABELSYNC_RANDOM_SEED", random_seed()),
            version,
        }
    }
}

fn random_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

struct EnvReader<F> {
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
    }

    fn to_u64(&self, name: &str, default: u64) -> u64 {
        self.get(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_f32(&self, name: &str, default: f32) -> f32 {
        self.get(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_bool(&self, name: &str, default: bool) -> bool {
        self.get(name).map(|e| !e.is_empty()).unwrap_or(default)
    }

    /// Like `to_bool`, but understands explicit negative values.
    fn to_flag(&self, name: &str, default: bool) -> bool {
        match self.get(name) {
            Some(value) => match &value.trim().to_lowercase()[..] {
                "" => default,
                "0" | "false" | "no" | "off" => false,
                _ => true,
            },
            None => default,
        }
    }

    fn to_str(&self, name: &str, default: &str) -> String {
        self.get(name)
            .unwrap_or_else(|| default.to_string())
            .replace("\\n", "\n")
    }

    fn to_str_or(&self, name: &str, fallback: &str, default: &str) -> String {
        match self.get(name).filter(|v| !v.is_empty()) {
            Some(value) => value,
            None => self.to_str(fallback, default),
        }
    }
}

use std::time::Duration;

use async_trait::async_trait;
use labelsync_config::Config;
use reqwest::{Client, ClientBuilder};
use tracing::debug;

use crate::{Result, SourceError, SourceService};

/// HTTP(S) document source.
///
/// One attempt per fetch, bounded by the configured timeout.
#[derive(Clone)]
pub struct HttpSourceService {
    timeout: u64,
    user_agent: String,
}

impl HttpSourceService {
    pub fn new(config: &Config) -> Self {
        Self {
            timeout: config.source.timeout,
            user_agent: format!("labelsync/{}", config.version),
        }
    }

    fn get_client(&self, url: &str) -> Result<Client> {
        ClientBuilder::new()
            .timeout(Duration::from_secs(self.timeout))
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| self.request_error(url, e))
    }

    fn request_error(&self, url: &str, e: reqwest::Error) -> SourceError {
        if e.is_timeout() {
            SourceError::TimeoutError {
                url: url.into(),
                timeout: self.timeout,
            }
        } else {
            SourceError::RequestError {
                url: url.into(),
                source: e,
            }
        }
    }
}

#[async_trait]
impl SourceService for HttpSourceService {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .get_client(url)?
            .get(url)
            .send()
            .await
            .map_err(|e| self.request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::StatusError {
                url: url.into(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.request_error(url, e))?;
        debug!(bytes = body.len(), "Fetched label document");

        Ok(body)
    }
}

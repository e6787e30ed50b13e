//! Auth.

use std::time::Duration;

use http::{header, HeaderMap, HeaderValue};
use labelsync_config::Config;
use reqwest::{ClientBuilder, Url};

use crate::errors::GitHubError;

const GITHUB_API_VERSION: &str = "2022-11-28";

/// Get an authenticated GitHub client builder.
pub fn get_authenticated_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let mut headers = default_headers();
    if !config.api.github.token.is_empty() {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", config.api.github.token))
            .map_err(|_| GitHubError::InvalidToken)?;
        value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, value);
    }

    Ok(get_client_builder(config).default_headers(headers))
}

fn get_client_builder(config: &Config) -> ClientBuilder {
    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("labelsync/{}", config.version))
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    headers.insert(
        "X-GitHub-Api-Version",
        HeaderValue::from_static(GITHUB_API_VERSION),
    );
    headers
}

/// Build a GitHub URL from path segments.
///
/// Segments are percent-encoded, so label names can contain any character.
pub fn build_github_url(config: &Config, segments: &[&str]) -> Result<Url, GitHubError> {
    let root_url = &config.api.github.root_url;
    let invalid = |reason: &str| GitHubError::InvalidRootUrl {
        url: root_url.clone(),
        reason: reason.into(),
    };

    let mut url = Url::parse(root_url).map_err(|e| invalid(&e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("cannot be used as a base URL"))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

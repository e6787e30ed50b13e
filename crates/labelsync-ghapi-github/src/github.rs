//! GitHub adapter

use async_trait::async_trait;
use labelsync_config::Config;
use labelsync_ghapi_interface::{types::GhLabel, ApiService, Result};
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use tracing::debug;

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

const LABELS_PER_PAGE: u32 = 100;

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

#[derive(Serialize)]
struct LabelCreateRequest<'a> {
    name: &'a str,
    color: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct LabelUpdateRequest<'a> {
    new_name: &'a str,
    color: &'a str,
    description: &'a str,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        get_authenticated_client_builder(&self.config)?
            .build()
            .map_err(GitHubError::from)
    }

    fn labels_url(&self, owner: &str, name: &str) -> Result<Url, GitHubError> {
        build_github_url(&self.config, &["repos", owner, name, "labels"])
    }

    fn label_url(&self, owner: &str, name: &str, label_name: &str) -> Result<Url, GitHubError> {
        build_github_url(&self.config, &["repos", owner, name, "labels", label_name])
    }

    async fn list_labels(&self, owner: &str, name: &str) -> Result<Vec<GhLabel>, GitHubError> {
        let client = self.get_client()?;
        let url = self.labels_url(owner, name)?;
        let mut labels = Vec::new();
        let mut page = 1;

        loop {
            let page_labels = client
                .get(url.clone())
                .query(&[("per_page", LABELS_PER_PAGE), ("page", page)])
                .send()
                .await?
                .error_for_status()?
                .json::<Vec<GhLabel>>()
                .await?;

            let count = page_labels.len();
            labels.extend(page_labels);
            if count < LABELS_PER_PAGE as usize {
                break;
            }

            page += 1;
        }

        debug!(
            repository_path = %format!("{owner}/{name}"),
            pages = page,
            count = labels.len(),
            "Listed repository labels"
        );

        Ok(labels)
    }

    async fn create_label(
        &self,
        owner: &str,
        name: &str,
        label: &GhLabel,
    ) -> Result<(), GitHubError> {
        self.get_client()?
            .post(self.labels_url(owner, name)?)
            .json(&LabelCreateRequest {
                name: &label.name,
                color: &label.color,
                description: label.description_or_empty(),
            })
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    async fn update_label(
        &self,
        owner: &str,
        name: &str,
        current_name: &str,
        label: &GhLabel,
    ) -> Result<(), GitHubError> {
        let response = self
            .get_client()?
            .patch(self.label_url(owner, name, current_name)?)
            .json(&LabelUpdateRequest {
                new_name: &label.name,
                color: &label.color,
                description: label.description_or_empty(),
            })
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(GitHubError::LabelNotFound {
                label: current_name.into(),
                repository_path: format!("{owner}/{name}"),
            });
        }

        response.error_for_status()?;
        Ok(())
    }

    async fn delete_label(
        &self,
        owner: &str,
        name: &str,
        label_name: &str,
    ) -> Result<(), GitHubError> {
        let response = self
            .get_client()?
            .delete(self.label_url(owner, name, label_name)?)
            .send()
            .await?;

        // Already gone: the end state is the one asked for.
        if response.status() == StatusCode::NOT_FOUND {
            debug!(label = label_name, "Label was already deleted");
            return Ok(());
        }

        response.error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self))]
    async fn labels_list(&self, owner: &str, name: &str) -> Result<Vec<GhLabel>> {
        Ok(self.list_labels(owner, name).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn labels_create(&self, owner: &str, name: &str, label: &GhLabel) -> Result<()> {
        Ok(self.create_label(owner, name, label).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn labels_update(
        &self,
        owner: &str,
        name: &str,
        current_name: &str,
        label: &GhLabel,
    ) -> Result<()> {
        Ok(self.update_label(owner, name, current_name, label).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn labels_delete(&self, owner: &str, name: &str, label_name: &str) -> Result<()> {
        Ok(self.delete_label(owner, name, label_name).await?)
    }
}

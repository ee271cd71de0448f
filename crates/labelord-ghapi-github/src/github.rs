//! GitHub adapter

use async_trait::async_trait;
use labelord_config::Config;
use labelord_ghapi_interface::{
    types::{GhLabel, GhPage, GhPageCursor, GhRepository},
    ApiService, Result,
};
use reqwest::{Client, Response, Url};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
    link::next_page_url,
};

const PER_PAGE: u32 = 100;

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
    client: Client,
}

impl GithubApiService {
    /// Creates new GitHub API adapter authenticated with `token`.
    pub fn new(config: Config, token: &str) -> Result<Self, GitHubError> {
        let client = get_authenticated_client_builder(&config, token)?.build()?;
        Ok(Self { config, client })
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    fn label_url(&self, repository: &str, name: &str) -> Result<Url, GitHubError> {
        let base = self.build_url(format!("/repos/{repository}/labels"));
        let mut url = Url::parse(&base).map_err(|_| GitHubError::InvalidUrl { url: base.clone() })?;
        url.path_segments_mut()
            .map_err(|_| GitHubError::InvalidUrl { url: base.clone() })?
            .push(name);
        Ok(url)
    }

    fn page_url(&self, path: String, cursor: GhPageCursor) -> String {
        match cursor {
            GhPageCursor::First => self.build_url(format!("{path}?per_page={PER_PAGE}")),
            GhPageCursor::Next(url) => url,
        }
    }

    async fn get_page<T: DeserializeOwned>(&self, url: String) -> Result<GhPage<T>, GitHubError> {
        let response = check_status(self.client.get(&url).send().await?).await?;
        let next = next_page_url(response.headers()).map(GhPageCursor::Next);
        let items = response.json::<Vec<T>>().await?;

        Ok(GhPage { items, next })
    }

    async fn create_label(&self, repository: &str, label: &GhLabel) -> Result<(), GitHubError> {
        let url = self.build_url(format!("/repos/{repository}/labels"));
        check_status(self.client.post(&url).json(label).send().await?).await?;
        Ok(())
    }

    async fn update_label(
        &self,
        repository: &str,
        current_name: &str,
        label: &GhLabel,
    ) -> Result<(), GitHubError> {
        let url = self.label_url(repository, current_name)?;
        check_status(self.client.patch(url).json(label).send().await?).await?;
        Ok(())
    }

    async fn delete_label(&self, repository: &str, name: &str) -> Result<(), GitHubError> {
        let url = self.label_url(repository, name)?;
        check_status(self.client.delete(url).send().await?).await?;
        Ok(())
    }
}

/// Turn non-2xx responses into status errors carrying GitHub's message.
async fn check_status(response: Response) -> Result<Response, GitHubError> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let fallback = status.canonical_reason().unwrap_or("Unknown Error").to_string();
    let message = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.message)
        .unwrap_or(fallback);

    Err(GitHubError::StatusError {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self))]
    async fn user_repositories_list_page(
        &self,
        cursor: GhPageCursor,
    ) -> Result<GhPage<GhRepository>> {
        let url = self.page_url("/user/repos".into(), cursor);
        Ok(self.get_page(url).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn labels_list_page(
        &self,
        repository: &str,
        cursor: GhPageCursor,
    ) -> Result<GhPage<GhLabel>> {
        let url = self.page_url(format!("/repos/{repository}/labels"), cursor);
        Ok(self.get_page(url).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn labels_create(&self, repository: &str, label: &GhLabel) -> Result<()> {
        Ok(self.create_label(repository, label).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn labels_update(
        &self,
        repository: &str,
        current_name: &str,
        label: &GhLabel,
    ) -> Result<()> {
        Ok(self.update_label(repository, current_name, label).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn labels_delete(&self, repository: &str, name: &str) -> Result<()> {
        Ok(self.delete_label(repository, name).await?)
    }
}

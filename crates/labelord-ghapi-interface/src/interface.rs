use async_trait::async_trait;

use crate::{
    types::{GhLabel, GhPage, GhPageCursor, GhRepository},
    Result,
};

/// GitHub API Adapter interface
///
/// Reads are paginated, one call per page; see [`crate::pagination`] for
/// lazy streams over every page. Writes issue exactly one request and never retry.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List one page of repositories accessible to the authenticated user.
    async fn user_repositories_list_page(
        &self,
        cursor: GhPageCursor,
    ) -> Result<GhPage<GhRepository>>;
    /// List one page of labels from a repository.
    async fn labels_list_page(
        &self,
        repository: &str,
        cursor: GhPageCursor,
    ) -> Result<GhPage<GhLabel>>;
    /// Create a label on a repository.
    async fn labels_create(&self, repository: &str, label: &GhLabel) -> Result<()>;
    /// Rename and/or recolor a label, identified by its current name.
    async fn labels_update(
        &self,
        repository: &str,
        current_name: &str,
        label: &GhLabel,
    ) -> Result<()>;
    /// Delete a label from a repository.
    async fn labels_delete(&self, repository: &str, name: &str) -> Result<()>;
}

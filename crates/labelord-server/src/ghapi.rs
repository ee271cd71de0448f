//! GitHub Api wrappers.

use async_trait::async_trait;
use labelord_ghapi_interface::{
    types::{GhLabel, GhPage, GhPageCursor, GhRepository},
    ApiService, Result,
};
use prometheus::IntCounter;

/// GitHub Api Service with metrics.
pub struct MetricsApiService {
    inner: Box<dyn ApiService>,
    calls: IntCounter,
}

impl MetricsApiService {
    /// Creates a new service counting calls on `calls`.
    pub fn new(inner: Box<dyn ApiService>, calls: IntCounter) -> Self {
        Self { inner, calls }
    }
}

#[async_trait]
impl ApiService for MetricsApiService {
    async fn user_repositories_list_page(
        &self,
        cursor: GhPageCursor,
    ) -> Result<GhPage<GhRepository>> {
        self.calls.inc();
        self.inner.user_repositories_list_page(cursor).await
    }

    async fn labels_list_page(
        &self,
        repository: &str,
        cursor: GhPageCursor,
    ) -> Result<GhPage<GhLabel>> {
        self.calls.inc();
        self.inner.labels_list_page(repository, cursor).await
    }

    async fn labels_create(&self, repository: &str, label: &GhLabel) -> Result<()> {
        self.calls.inc();
        self.inner.labels_create(repository, label).await
    }

    async fn labels_update(
        &self,
        repository: &str,
        current_name: &str,
        label: &GhLabel,
    ) -> Result<()> {
        self.calls.inc();
        self.inner
            .labels_update(repository, current_name, label)
            .await
    }

    async fn labels_delete(&self, repository: &str, name: &str) -> Result<()> {
        self.calls.inc();
        self.inner.labels_delete(repository, name).await
    }
}

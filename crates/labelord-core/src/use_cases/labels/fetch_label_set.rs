use async_trait::async_trait;
use labelord_ghapi_interface::{pagination, ApiService};
use labelord_models::{Label, LabelSet};

use crate::Result;

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait FetchLabelSetUseCaseInterface {
    async fn run(&self, repository: &str) -> Result<LabelSet>;
}

/// Fetch every label of a repository, indexed by lowercase name.
pub struct FetchLabelSetUseCase<'a> {
    pub api_service: &'a dyn ApiService,
}

#[async_trait]
impl<'a> FetchLabelSetUseCaseInterface for FetchLabelSetUseCase<'a> {
    #[tracing::instrument(skip(self))]
    async fn run(&self, repository: &str) -> Result<LabelSet> {
        Ok(pagination::labels_list_all(self.api_service, repository)
            .await?
            .into_iter()
            .map(|label| Label::new(label.name, label.color))
            .collect())
    }
}

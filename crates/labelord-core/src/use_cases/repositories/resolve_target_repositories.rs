use async_trait::async_trait;
use labelord_config::Settings;
use labelord_ghapi_interface::ApiService;

use super::list_repositories::{ListRepositoriesUseCase, ListRepositoriesUseCaseInterface};
use crate::{DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ResolveTargetRepositoriesUseCaseInterface {
    async fn run(&self, all_repositories: bool, settings: &Settings) -> Result<Vec<String>>;
}

/// Resolve the repositories to reconcile.
///
/// Every accessible repository when asked for, else the enabled `[repos]`
/// entries in file order.
pub struct ResolveTargetRepositoriesUseCase<'a> {
    pub api_service: &'a dyn ApiService,
}

#[async_trait]
impl<'a> ResolveTargetRepositoriesUseCaseInterface for ResolveTargetRepositoriesUseCase<'a> {
    #[tracing::instrument(skip(self, settings))]
    async fn run(&self, all_repositories: bool, settings: &Settings) -> Result<Vec<String>> {
        if all_repositories {
            return ListRepositoriesUseCase {
                api_service: self.api_service,
            }
            .run()
            .await;
        }

        settings
            .repositories
            .clone()
            .ok_or(DomainError::MissingRepositorySpecification)
    }
}

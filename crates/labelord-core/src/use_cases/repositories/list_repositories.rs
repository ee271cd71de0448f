use async_trait::async_trait;
use labelord_ghapi_interface::{pagination, ApiService};

use crate::Result;

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListRepositoriesUseCaseInterface {
    async fn run(&self) -> Result<Vec<String>>;
}

/// List every repository accessible to the authenticated user.
pub struct ListRepositoriesUseCase<'a> {
    pub api_service: &'a dyn ApiService,
}

#[async_trait]
impl<'a> ListRepositoriesUseCaseInterface for ListRepositoriesUseCase<'a> {
    #[tracing::instrument(skip(self))]
    async fn run(&self) -> Result<Vec<String>> {
        Ok(pagination::user_repositories_list_all(self.api_service)
            .await?
            .into_iter()
            .map(|repository| repository.full_name)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use labelord_ghapi_interface::{
        types::{GhPage, GhPageCursor, GhRepository},
        ApiError, MockApiService,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::DomainError;

    #[tokio::test]
    async fn run() -> Result<()> {
        let mut api_service = MockApiService::new();
        api_service
            .expect_user_repositories_list_page()
            .once()
            .withf(|cursor| cursor == &GhPageCursor::First)
            .return_once(|_| {
                Ok(GhPage::with_next(
                    vec![GhRepository::new("owner/one")],
                    "https://api.github.com/user/repos?page=2",
                ))
            });
        api_service
            .expect_user_repositories_list_page()
            .once()
            .return_once(|_| Ok(GhPage::last(vec![GhRepository::new("owner/two")])));

        let repositories = ListRepositoriesUseCase {
            api_service: &api_service,
        }
        .run()
        .await?;

        assert_eq!(repositories, vec!["owner/one", "owner/two"]);
        Ok(())
    }

    #[tokio::test]
    async fn unauthorized() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_user_repositories_list_page()
            .once()
            .return_once(|_| {
                Err(ApiError::HttpError {
                    status: 401,
                    message: "Bad credentials".into(),
                })
            });

        let result = ListRepositoriesUseCase {
            api_service: &api_service,
        }
        .run()
        .await;

        assert!(matches!(
            result,
            Err(DomainError::ApiError { source }) if source.status() == Some(401)
        ));
    }
}

use async_trait::async_trait;
use clap::Parser;
use labelord_core::use_cases::repositories::list_repositories::{
    ListRepositoriesUseCase, ListRepositoriesUseCaseInterface,
};

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// List repositories accessible with the token
#[derive(Parser)]
pub(crate) struct ListReposCommand;

#[async_trait]
impl Command for ListReposCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let repositories = ListRepositoriesUseCase {
            api_service: ctx.api_service.as_ref(),
        }
        .run()
        .await?;

        for repository in repositories {
            writeln!(ctx.writer.write().await, "{repository}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use labelord_ghapi_interface::{
        types::{GhPage, GhRepository},
        ApiError,
    };
    use pretty_assertions::assert_eq;

    use crate::{
        testutils::{test_command, test_command_result, CommandContextTest},
        CliError,
    };

    #[tokio::test]
    async fn run() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_user_repositories_list_page()
            .once()
            .return_once(|_| {
                Ok(GhPage::with_next(
                    vec![GhRepository::new("octocat/hello")],
                    "https://api.github.com/user/repos?page=2",
                ))
            });
        ctx.api_service
            .expect_user_repositories_list_page()
            .once()
            .return_once(|_| Ok(GhPage::last(vec![GhRepository::new("octocat/world")])));

        assert_eq!(
            test_command(ctx, &["list-repos"]).await,
            "octocat/hello\noctocat/world\n"
        );
    }

    #[tokio::test]
    async fn unauthorized() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_user_repositories_list_page()
            .once()
            .return_once(|_| {
                Err(ApiError::HttpError {
                    status: 401,
                    message: "Bad credentials".into(),
                })
            });

        let (result, output) = test_command_result(ctx, &["list-repos"]).await;
        assert_eq!(output, "");

        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(matches!(err, CliError::DomainError { .. }));
        assert_eq!(err.to_string(), "GitHub: ERROR 401 - Bad credentials");
    }
}

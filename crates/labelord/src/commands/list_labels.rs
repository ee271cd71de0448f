use async_trait::async_trait;
use clap::Parser;
use labelord_ghapi_interface::pagination;
use labelord_models::RepositoryPath;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// List labels of a repository
#[derive(Parser)]
pub(crate) struct ListLabelsCommand {
    /// Repository, as owner/name
    repository: RepositoryPath,
}

#[async_trait]
impl Command for ListLabelsCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let labels =
            pagination::labels_list_all(ctx.api_service.as_ref(), &self.repository.full_name())
                .await?;

        for label in labels {
            writeln!(ctx.writer.write().await, "#{} {}", label.color, label.name)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use labelord_ghapi_interface::{
        types::{GhLabel, GhPage},
        ApiError,
    };
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, test_command_result, CommandContextTest};

    #[tokio::test]
    async fn run() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_labels_list_page()
            .once()
            .withf(|repository, _| repository == "octocat/hello")
            .return_once(|_, _| {
                Ok(GhPage::last(vec![
                    GhLabel::new("bug", "ff0000"),
                    GhLabel::new("Needs review", "00ff00"),
                ]))
            });

        assert_eq!(
            test_command(ctx, &["list-labels", "octocat/hello"]).await,
            "#ff0000 bug\n#00ff00 Needs review\n"
        );
    }

    #[tokio::test]
    async fn not_found() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_labels_list_page()
            .once()
            .return_once(|_, _| {
                Err(ApiError::HttpError {
                    status: 404,
                    message: "Not Found".into(),
                })
            });

        let (result, _) = test_command_result(ctx, &["list-labels", "octocat/missing"]).await;
        assert_eq!(result.unwrap_err().exit_code(), 5);
    }
}

use async_trait::async_trait;
use clap::Parser;
use labelord_core::use_cases::synchronization::run_synchronization::{
    RunSynchronizationUseCase, RunSynchronizationUseCaseInterface, SynchronizationOptions,
};
use labelord_models::{RepositoryPath, SyncMode, Verbosity};

use crate::{
    commands::{Command, CommandContext},
    CliError, Result,
};

/// Synchronize labels of repositories
#[derive(Parser)]
pub(crate) struct RunCommand {
    /// Synchronization mode: `update` adds and modifies, `replace` also deletes
    mode: SyncMode,

    /// Run on every repository accessible with the token
    #[arg(short, long)]
    all_repos: bool,

    /// Print operations without applying them
    #[arg(short, long)]
    dry_run: bool,

    /// Repository whose labels are the desired ones
    #[arg(short = 'r', long)]
    template_repo: Option<RepositoryPath>,

    /// Print every operation
    #[arg(short, long)]
    verbose: bool,

    /// Print the summary only
    #[arg(short, long)]
    quiet: bool,
}

#[async_trait]
impl Command for RunCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let verbosity = Verbosity::from_flags(self.verbose, self.quiet);
        let options = SynchronizationOptions {
            mode: self.mode,
            all_repositories: self.all_repos,
            template_repository: self.template_repo.map(|repository| repository.full_name()),
            dry_run: self.dry_run,
        };

        let report = RunSynchronizationUseCase {
            api_service: ctx.api_service.as_ref(),
        }
        .run(options, &ctx.settings)
        .await?;

        for line in report.render(verbosity) {
            writeln!(ctx.writer.write().await, "{line}")?;
        }

        if report.is_success() {
            Ok(())
        } else {
            Err(CliError::SynchronizationFailed {
                count: report.total_errors(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use labelord_config::Settings;
    use labelord_ghapi_interface::{
        types::{GhLabel, GhPage},
        ApiError,
    };
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, test_command_result, CommandContextTest};

    fn settings() -> Settings {
        Settings {
            labels: Some(vec![
                ("Bug".into(), "ff0000".into()),
                ("feature".into(), "00ff00".into()),
            ]),
            repositories: Some(vec!["octocat/hello".into()]),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn dry_run_replace_verbose() {
        let mut ctx = CommandContextTest::new();
        ctx.settings = settings();
        ctx.api_service
            .expect_labels_list_page()
            .once()
            .return_once(|_, _| {
                Ok(GhPage::last(vec![
                    GhLabel::new("bug", "000000"),
                    GhLabel::new("wontfix", "ffffff"),
                ]))
            });

        assert_eq!(
            test_command(ctx, &["run", "replace", "--dry-run", "-v"]).await,
            "[ADD][DRY] octocat/hello; feature; 00ff00\n\
             [UPD][DRY] octocat/hello; Bug; ff0000\n\
             [DEL][DRY] octocat/hello; wontfix; ffffff\n\
             [SUMMARY] 1 repo(s) updated successfully\n"
        );
    }

    #[tokio::test]
    async fn errors_exit_code() {
        let mut ctx = CommandContextTest::new();
        ctx.settings = settings();
        ctx.api_service
            .expect_labels_list_page()
            .once()
            .return_once(|_, _| Ok(GhPage::last(vec![GhLabel::new("feature", "00ff00")])));
        ctx.api_service
            .expect_labels_create()
            .once()
            .return_once(|_, _| {
                Err(ApiError::HttpError {
                    status: 422,
                    message: "Validation Failed".into(),
                })
            });

        let (result, output) = test_command_result(ctx, &["run", "update"]).await;
        assert_eq!(
            output,
            "ERROR: ADD; octocat/hello; Bug; ff0000; 422 - Validation Failed\n\
             SUMMARY: 1 error(s) in total, please check log above\n"
        );
        assert_eq!(result.unwrap_err().exit_code(), 10);
    }

    #[tokio::test]
    async fn missing_labels() {
        let mut ctx = CommandContextTest::new();
        ctx.settings = Settings {
            repositories: Some(vec!["octocat/hello".into()]),
            ..Default::default()
        };

        let (result, output) = test_command_result(ctx, &["run", "update", "-q"]).await;
        assert_eq!(output, "");
        assert_eq!(result.unwrap_err().exit_code(), 6);
    }

    #[tokio::test]
    async fn missing_repositories() {
        let mut ctx = CommandContextTest::new();
        ctx.settings = Settings {
            labels: Some(vec![]),
            ..Default::default()
        };

        let (result, _) = test_command_result(ctx, &["run", "update"]).await;
        assert_eq!(result.unwrap_err().exit_code(), 7);
    }
}

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use labelord_config::{Config, Settings, DEFAULT_SETTINGS_PATH};
use labelord_ghapi_github::GithubApiService;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    CliError, Result,
};

#[derive(Parser)]
#[command(about = "Manage GitHub labels across repositories", long_about = None)]
pub struct Args {
    /// Settings file
    #[arg(
        short,
        long,
        global = true,
        env = "LABELORD_CONFIG",
        default_value = DEFAULT_SETTINGS_PATH
    )]
    config: PathBuf,

    /// GitHub token, takes priority over the settings file
    #[arg(short, long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    cmd: SubCommand,
}

impl Args {
    /// Check settings, then resolve the token.
    fn prepare(&self, settings: &Settings) -> Result<String> {
        self.cmd.check_settings(settings)?;
        self.resolve_token(settings)
    }

    fn resolve_token(&self, settings: &Settings) -> Result<String> {
        self.token
            .clone()
            .filter(|token| !token.is_empty())
            .or_else(|| settings.github_token.clone())
            .ok_or(CliError::MissingToken)
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let settings = Settings::from_path(&args.config)?;
        info!(
            path = %args.config.display(),
            message = "Settings loaded"
        );

        let token = args.prepare(&settings)?;
        let api_service = GithubApiService::new(config.clone(), &token)?;

        let ctx = CommandContext {
            config,
            settings,
            api_service: Box::new(api_service),
            writer: Arc::new(RwLock::new(std::io::stdout())),
        };

        actix_rt::System::new().block_on(Self::parse_args_async(args, ctx))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_token_priority() {
        let settings = Settings {
            github_token: Some("from-file".into()),
            ..Default::default()
        };

        let args = Args::try_parse_from(["labelord", "-t", "from-flag", "list-repos"]).unwrap();
        assert_eq!(args.resolve_token(&settings).unwrap(), "from-flag");

        let args = Args::try_parse_from(["labelord", "list-repos", "--token", ""]).unwrap();
        assert_eq!(args.resolve_token(&settings).unwrap(), "from-file");
        assert!(matches!(
            args.resolve_token(&Settings::default()),
            Err(CliError::MissingToken)
        ));
    }

    #[test]
    fn test_repositories_checked_before_token() {
        let args = Args::try_parse_from(["labelord", "run-server", "--token", ""]).unwrap();
        assert_eq!(args.prepare(&Settings::default()).unwrap_err().exit_code(), 7);

        let settings = Settings {
            repositories: Some(vec!["octocat/hello".into()]),
            ..Default::default()
        };
        assert_eq!(args.prepare(&settings).unwrap_err().exit_code(), 3);

        let args = Args::try_parse_from(["labelord", "list-repos", "--token", ""]).unwrap();
        assert_eq!(args.prepare(&Settings::default()).unwrap_err().exit_code(), 3);
    }

    #[test]
    fn test_global_options() {
        let args =
            Args::try_parse_from(["labelord", "run", "update", "-c", "other.cfg"]).unwrap();
        assert_eq!(args.config, PathBuf::from("other.cfg"));
    }

    #[test]
    fn test_run_server_host_flag() {
        assert!(Args::try_parse_from(["labelord", "run-server", "-h", "0.0.0.0", "-p", "8080"]).is_ok());
        assert!(Args::try_parse_from(["labelord", "run", "merge"]).is_err());
    }
}

use async_trait::async_trait;
use clap::Parser;
use labelord_config::Settings;
use labelord_server::{run_server, AppContext, ServerError};

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Start the label replication webhook server
#[derive(Parser)]
#[command(disable_help_flag = true)]
pub(crate) struct RunServerCommand {
    /// Bind address
    #[arg(short, long)]
    host: Option<String>,

    /// Bind port
    #[arg(short, long)]
    port: Option<u16>,

    /// Mount debug routes
    #[arg(short, long)]
    debug: bool,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

#[async_trait]
impl Command for RunServerCommand {
    fn check_settings(&self, settings: &Settings) -> Result<()> {
        match settings.repositories {
            Some(_) => Ok(()),
            None => Err(ServerError::MissingRepositorySpecification.into()),
        }
    }

    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let mut config = ctx.config;
        if let Some(host) = self.host {
            config.server.bind_ip = host;
        }
        if let Some(port) = self.port {
            config.server.bind_port = port;
        }
        config.server.debug_mode = self.debug;

        let context = AppContext::load(config, &ctx.settings, ctx.api_service)?;

        tokio::task::spawn_local(async move { run_server(context).await })
            .await
            .map_err(std::io::Error::from)??;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use labelord_config::Settings;
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command_result, CommandContextTest};

    #[tokio::test]
    async fn missing_webhook_secret() {
        let mut ctx = CommandContextTest::new();
        ctx.settings = Settings {
            repositories: Some(vec!["octocat/hello".into()]),
            ..Default::default()
        };

        let (result, _) = test_command_result(ctx, &["run-server", "-h", "0.0.0.0"]).await;
        assert_eq!(result.unwrap_err().exit_code(), 8);
    }

    #[tokio::test]
    async fn missing_repositories() {
        let mut ctx = CommandContextTest::new();
        ctx.settings = Settings {
            webhook_secret: Some("secret".into()),
            ..Default::default()
        };

        let (result, _) = test_command_result(ctx, &["run-server", "--debug"]).await;
        assert_eq!(result.unwrap_err().exit_code(), 7);
    }
}

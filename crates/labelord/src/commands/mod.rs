//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use labelord_config::{Config, Settings};
use labelord_ghapi_interface::ApiService;
use tokio::sync::RwLock;

use self::{
    list_labels::ListLabelsCommand, list_repos::ListReposCommand, run::RunCommand,
    run_server::RunServerCommand,
};
use crate::Result;

mod list_labels;
mod list_repos;
mod run;
mod run_server;

pub(crate) struct CommandContext {
    pub config: Config,
    pub settings: Settings,
    pub api_service: Box<dyn ApiService>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

#[async_trait]
pub(crate) trait Command {
    /// Settings checks run before the GitHub client is built.
    fn check_settings(&self, _settings: &Settings) -> Result<()> {
        Ok(())
    }

    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    ListRepos(ListReposCommand),
    ListLabels(ListLabelsCommand),
    Run(RunCommand),
    RunServer(RunServerCommand),
}

#[async_trait]
impl Command for SubCommand {
    fn check_settings(&self, settings: &Settings) -> Result<()> {
        match self {
            Self::ListRepos(sub) => sub.check_settings(settings),
            Self::ListLabels(sub) => sub.check_settings(settings),
            Self::Run(sub) => sub.check_settings(settings),
            Self::RunServer(sub) => sub.check_settings(settings),
        }
    }

    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::ListRepos(sub) => sub.execute(ctx).await,
            Self::ListLabels(sub) => sub.execute(ctx).await,
            Self::Run(sub) => sub.execute(ctx).await,
            Self::RunServer(sub) => sub.execute(ctx).await,
        }
    }
}

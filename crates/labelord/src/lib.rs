//! CLI module.

use args::{Args, CommandExecutor};
use clap::Parser;
use labelord_config::Config;
use labelord_logging::configure_logging;
use tracing::info;

pub(crate) mod args;
mod commands;
pub mod errors;
#[cfg(test)]
mod testutils;

pub use errors::{CliError, Result};

/// Initialize command line.
pub fn initialize_command_line() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string());
    configure_logging(&config)?;

    info!(version = %config.version, message = "Starting labelord");

    let args = Args::parse();
    CommandExecutor::parse_args(config, args)?;

    Ok(())
}

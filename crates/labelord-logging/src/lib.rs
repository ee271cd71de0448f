//! Tracing setup for the CLI and the replication server.
//!
//! Everything is written to stderr so command output on stdout can be piped.

use std::str::FromStr;

use labelord_config::Config;
use thiserror::Error;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_error::ErrorLayer;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Directives used when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "warn,labelord_server=info,actix_server=info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not install the tracing subscriber: {source}")]
    SubscriberError {
        source: tracing::dispatcher::SetGlobalDefaultError,
    },

    #[error("Could not forward `log` records to tracing: {source}")]
    LogBridgeError {
        source: tracing::log::SetLoggerError,
    },

    #[error("Invalid log directives `{directives}`: {source}")]
    DirectivesError {
        source: tracing_subscriber::filter::ParseError,
        directives: String,
    },
}

fn parse_directives(directives: Option<String>) -> Result<EnvFilter, LoggingError> {
    let directives = directives.unwrap_or_else(|| DEFAULT_DIRECTIVES.to_owned());
    EnvFilter::from_str(&directives)
        .map_err(|source| LoggingError::DirectivesError { source, directives })
}

/// Install the global subscriber.
///
/// With `LABELORD_LOGGING_USE_BUNYAN`, Bunyan JSON records are emitted
/// alongside the tree output.
pub fn configure_logging(config: &Config) -> Result<(), LoggingError> {
    LogTracer::init().map_err(|source| LoggingError::LogBridgeError { source })?;

    let filter = parse_directives(std::env::var("RUST_LOG").ok())?;
    let tree = HierarchicalLayer::new(2)
        .with_writer(std::io::stderr)
        .with_targets(true)
        .with_bracketed_fields(true);

    let bunyan = config.logging.use_bunyan.then(|| {
        (
            JsonStorageLayer,
            BunyanFormattingLayer::new(format!("labelord-{}", config.version), std::io::stderr),
        )
    });
    let (storage, bunyan) = match bunyan {
        Some((storage, bunyan)) => (Some(storage), Some(bunyan)),
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(tree)
        .with(filter)
        .with(storage)
        .with(bunyan);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| LoggingError::SubscriberError { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert!(parse_directives(None).is_ok());
        assert!(parse_directives(Some("debug,labelord_core=trace".into())).is_ok());
    }

    #[test]
    fn test_bad_directives() {
        let err = parse_directives(Some("labelord=notalevel".into())).unwrap_err();
        assert!(matches!(
            err,
            LoggingError::DirectivesError { ref directives, .. } if directives == "labelord=notalevel"
        ));
        assert!(err.to_string().starts_with("Invalid log directives `labelord=notalevel`: "));
    }
}

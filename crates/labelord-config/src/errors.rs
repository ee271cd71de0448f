//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read settings file '{}': {source}", path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse settings: {source}")]
    ParseError { source: ini::ParseError },

    #[error("Invalid boolean value '{value}' for option '{option}' in section [{section}]")]
    InvalidBoolean {
        section: String,
        option: String,
        value: String,
    },
}

/// Result alias for `ConfigError`.
pub type Result<T, E = ConfigError> = core::result::Result<T, E>;

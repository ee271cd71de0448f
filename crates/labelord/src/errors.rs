//! CLI errors.

use labelord_config::ConfigError;
use labelord_core::DomainError;
use labelord_ghapi_github::GitHubError;
use labelord_ghapi_interface::ApiError;
use labelord_server::ServerError;
use thiserror::Error;

/// CLI error.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No GitHub token has been provided")]
    MissingToken,

    #[error(transparent)]
    ConfigError { source: ConfigError },

    #[error(transparent)]
    DomainError { source: DomainError },

    #[error(transparent)]
    ApiError { source: ApiError },

    #[error("Could not build GitHub client,\n  caused by: {source}")]
    GitHubError { source: GitHubError },

    #[error(transparent)]
    ServerError { source: ServerError },

    #[error("{count} error(s) occurred during synchronization")]
    SynchronizationFailed { count: usize },

    #[error("I/O error,\n  caused by: {source}")]
    IoError { source: std::io::Error },
}

impl CliError {
    /// Process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingToken => 3,
            Self::ApiError { source } => api_exit_code(source),
            Self::DomainError { source } => match source {
                DomainError::ApiError { source } => api_exit_code(source),
                DomainError::MissingLabelSpecification => 6,
                DomainError::MissingRepositorySpecification => 7,
            },
            Self::ServerError { source } => match source {
                ServerError::MissingRepositorySpecification => 7,
                ServerError::MissingWebhookSecret => 8,
                _ => 1,
            },
            Self::SynchronizationFailed { .. } => 10,
            Self::ConfigError { .. } | Self::GitHubError { .. } | Self::IoError { .. } => 1,
        }
    }
}

fn api_exit_code(error: &ApiError) -> i32 {
    match error.status() {
        Some(401) => 4,
        Some(404) => 5,
        _ => 10,
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::ConfigError { source: e }
    }
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        Self::DomainError { source: e }
    }
}

impl From<ApiError> for CliError {
    fn from(e: ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<GitHubError> for CliError {
    fn from(e: GitHubError) -> Self {
        Self::GitHubError { source: e }
    }
}

impl From<ServerError> for CliError {
    fn from(e: ServerError) -> Self {
        Self::ServerError { source: e }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError { source: e }
    }
}

/// Result alias for `CliError`.
pub type Result<T, E = CliError> = core::result::Result<T, E>;

//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response.
    #[error("GitHub: ERROR {status} - {message}")]
    HttpError { status: u16, message: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ApiError {
    /// HTTP status, when GitHub answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            Self::ImplementationError { .. } => None,
        }
    }

    /// Short `<status> - <message>` form used in operation logs.
    pub fn short_description(&self) -> String {
        match self {
            Self::HttpError { status, message } => format!("{status} - {message}"),
            Self::ImplementationError { source } => source.to_string(),
        }
    }
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;

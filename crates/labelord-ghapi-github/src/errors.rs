use labelord_ghapi_interface::ApiError;

/// GitHub adapter error.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names, missing_docs)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("GitHub: ERROR {status} - {message}")]
    StatusError { status: u16, message: String },

    #[error("Token contains characters not allowed in a header")]
    InvalidToken { source: http::header::InvalidHeaderValue },

    #[error("Malformed URL: {url}")]
    InvalidUrl { url: String },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::StatusError { status, message } => ApiError::HttpError { status, message },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}

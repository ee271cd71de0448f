//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`labelord_ghapi_interface::ApiError`].
    #[error(transparent)]
    ApiError {
        source: labelord_ghapi_interface::ApiError,
    },

    #[error("No labels specification has been found")]
    MissingLabelSpecification,

    #[error("No repositories specification has been found")]
    MissingRepositorySpecification,
}

impl From<labelord_ghapi_interface::ApiError> for DomainError {
    fn from(e: labelord_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T, E = DomainError> = core::result::Result<T, E>;

//! Server errors.

use actix_http::StatusCode;
use actix_web::ResponseError;
use thiserror::Error;

use crate::event_type::{EventType, EventTypeError};

/// Server error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Error while parsing webhook event for type {event_type},\n  caused by: {source}")]
    EventParseError {
        event_type: EventType,
        source: serde_json::Error,
    },

    #[error("Missing webhook event type.")]
    MissingEventType,

    #[error(transparent)]
    UnsupportedEvent { source: EventTypeError },

    #[error("Repository '{repository}' is not configured.")]
    UnknownRepository { repository: String },

    #[error("Unknown label action.")]
    UnknownLabelAction,

    #[error("Missing webhook signature.")]
    MissingWebhookSignature,

    #[error("Invalid webhook signature.")]
    InvalidWebhookSignature,

    #[error("Could not read request payload,\n  caused by: {source}")]
    PayloadError {
        source: actix_web::error::PayloadError,
    },

    #[error("No repositories specification has been found")]
    MissingRepositorySpecification,

    #[error("No webhook secret has been provided")]
    MissingWebhookSecret,

    #[error("Could not set up metrics,\n  caused by: {source}")]
    MetricsError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("I/O error,\n  caused by: {source}")]
    IoError { source: std::io::Error },
}

impl From<prometheus::Error> for ServerError {
    fn from(e: prometheus::Error) -> Self {
        Self::MetricsError { source: e.into() }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match &self {
            ServerError::MissingWebhookSignature | ServerError::InvalidWebhookSignature => {
                StatusCode::UNAUTHORIZED
            }
            ServerError::EventParseError { .. }
            | ServerError::MissingEventType
            | ServerError::UnsupportedEvent { .. }
            | ServerError::UnknownRepository { .. }
            | ServerError::PayloadError { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result alias for `ServerError`.
pub type Result<T, E = ServerError> = core::result::Result<T, E>;

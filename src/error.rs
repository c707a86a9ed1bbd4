//! Error types for the mapping store and the HTTP boundary.
//!
//! [`StoreError`] is what the store returns to its immediate caller; it keeps
//! user-input faults apart from infrastructure faults. [`AppError`] is the
//! HTTP-facing form that handlers return.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// Failure of the secure random source while generating a short code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to generate random index for short URL: {0}")]
pub struct RandomnessError(String);

impl RandomnessError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Outcome of a failed `save` or `resolve`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("original URL is empty")]
    EmptyUrl,

    #[error("invalid URL: {reason}")]
    InvalidUrl { reason: String },

    #[error("short URL is empty")]
    EmptyCode,

    #[error("short URL does not exist")]
    NotFound,

    #[error(transparent)]
    Randomness(#[from] RandomnessError),
}

impl StoreError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }

    /// Returns true for faults caused by the caller's input.
    ///
    /// Only [`StoreError::Randomness`] reflects an environment fault, and it is
    /// the only one a caller may reasonably retry.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Randomness(_))
    }
}

/// Error returned by HTTP handlers.
///
/// Rendered as a plain-text body carrying the human-readable message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        if e.is_client_error() {
            AppError::bad_request(e.to_string())
        } else {
            AppError::internal(e.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::BadRequest { message } | AppError::Internal { message } => message,
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

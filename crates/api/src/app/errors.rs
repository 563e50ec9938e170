use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use shows_core::DomainError;
use shows_infra::StoreError;

use crate::app::envelope::{ApiResponse, EnvelopeError};

pub const NOT_FOUND_MESSAGE: &str = "No show with this id exists";
pub const MISSING_PARAMETER_MESSAGE: &str = "One of the parameters is missing";

/// Request failures, rendered as envelopes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    /// A required create parameter was absent or empty.
    ///
    /// Carries the configured status (404 unless overridden).
    #[error("{}", MISSING_PARAMETER_MESSAGE)]
    MissingParameter { status: StatusCode },

    #[error("{0}")]
    InvalidId(String),

    #[error("{0}")]
    InvalidParameter(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("envelope error: {0}")]
    Envelope(#[from] EnvelopeError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MissingParameter { status } => *status,
            ApiError::InvalidId(_) | ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) | ApiError::Envelope(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidId(msg) => ApiError::InvalidId(msg),
            DomainError::Validation(msg) => ApiError::InvalidParameter(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            return ApiResponse::new(status)
                .with_message("internal server error")
                .into_response();
        }
        ApiResponse::new(status).with_message(self.to_string()).into_response()
    }
}

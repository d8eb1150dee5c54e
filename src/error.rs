//! Application error type and its HTTP rendering.
//!
//! Every handler error ends up here. Validation errors echo their message
//! to the caller; every other variant is logged with its cause and rendered
//! as a generic `Internal server error.` so no query text or driver detail
//! leaks into a response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned for every non-validation failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// JSON body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller input was rejected. The message is shown verbatim.
    #[error("{message}")]
    Validation { message: String },

    /// The request body could not be decoded.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::MalformedBody(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the caller.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation { message } => message.clone(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = ErrorBody {
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

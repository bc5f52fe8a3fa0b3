//! HTTP error mapping.
//!
//! [`ApiError`] wraps [`AppError`] so the domain error type can be turned
//! into an HTTP response without the lower crates knowing about Axum.
//! Handlers return `Result<_, ApiError>` and use `?` on anything that
//! yields an [`AppError`].

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use vidhub_core::AppError;
use vidhub_core::error::ErrorKind;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code, stable across releases.
    pub error: String,
    /// Human-readable message safe to show to API clients.
    pub message: String,
    /// Optional structured context for the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Newtype that carries an [`AppError`] across the handler boundary.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        let (status, code) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ErrorKind::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Database
            | ErrorKind::Storage
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        // Internal details never leave the server.
        let message = if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, "Request failed");
            "Internal server error".to_string()
        } else {
            tracing::warn!(kind = %err.kind, error = %err.message, "Request rejected");
            err.message
        };

        let body = ApiErrorResponse {
            error: code.to_string(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

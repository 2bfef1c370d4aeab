//! Application Error Types
//!
//! Centralized error handling with Axum integration. Every failure leaves
//! the server as `{ "success": false, "error": "..." }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;

/// Generic message returned for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Readable summary of a store failure for the logs.
///
/// Constraint violations name the constraint; anything else keeps the
/// driver's message.
pub fn describe_database_error(e: &sqlx::Error) -> String {
    match e {
        sqlx::Error::Database(db_err) => match violation_summary(db_err.kind()) {
            Some(summary) => format!(
                "{} ({})",
                summary,
                db_err.constraint().unwrap_or("unnamed constraint")
            ),
            None => db_err.message().to_string(),
        },
        other => other.to_string(),
    }
}

fn violation_summary(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::UniqueViolation => Some("A record with this value already exists"),
        ErrorKind::ForeignKeyViolation => Some("Referenced record does not exist"),
        ErrorKind::NotNullViolation => Some("Required field is missing"),
        _ => None,
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::InvalidInput(msg) | AppError::Unauthorized(msg) | AppError::NotFound(msg) => {
                msg
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                INTERNAL_ERROR_MESSAGE.into()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", describe_database_error(&e));
                INTERNAL_ERROR_MESSAGE.into()
            }
        };

        let body = ErrorResponse {
            success: false,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}

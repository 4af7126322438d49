//! Land Error Types
//!
//! This module provides Land-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::validation::FieldErrors;

/// Land-specific result type alias
pub type LandResult<T> = Result<T, LandError>;

/// Land-specific error variants
///
/// These map to the two HTTP outcomes the service can produce besides
/// success: a 400 carrying per-field messages (or a malformed-request
/// detail), and a 500 for store/filesystem faults.
#[derive(Debug, Error)]
pub enum LandError {
    /// One or more submitted fields violated their constraints
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// The multipart body could not be decoded
    #[error("Malformed form data: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Media storage (filesystem) error
    #[error("Media storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LandError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            LandError::Validation(_) | LandError::Multipart(_) => StatusCode::BAD_REQUEST,
            LandError::Database(_) | LandError::Storage(_) | LandError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LandError::Validation(_) | LandError::Multipart(_) => ErrorKind::BadRequest,
            LandError::Database(_) | LandError::Storage(_) | LandError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            LandError::Database(e) => {
                tracing::error!(error = %e, "Land database error");
            }
            LandError::Storage(e) => {
                tracing::error!(error = %e, "Land media storage error");
            }
            LandError::Internal(msg) => {
                tracing::error!(message = %msg, "Land internal error");
            }
            LandError::Multipart(e) => {
                tracing::warn!(error = %e, "Rejected malformed form submission");
            }
            LandError::Validation(errors) => {
                tracing::debug!(fields = errors.field_count(), "Land validation failed");
            }
        }
    }
}

impl From<LandError> for AppError {
    fn from(err: LandError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for LandError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        match self {
            // Client errors carry their cause; the field map is the contract
            LandError::Validation(errors) => (status, Json(errors)).into_response(),
            LandError::Multipart(err) => (
                status,
                Json(serde_json::json!({ "detail": err.to_string() })),
            )
                .into_response(),
            // Return empty body for server errors (don't leak details)
            _ => (status, ()).into_response(),
        }
    }
}

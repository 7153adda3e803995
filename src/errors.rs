//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic conversion into the JSON response envelope.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Request validation failed")]
    InvalidFields(BTreeMap<String, Vec<String>>),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // Storage failure
    #[error("Database error")]
    Database(#[from] DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error envelope, same shape as successful responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<BTreeMap<String, Vec<String>>>,
    status_code: u16,
}

/// Underlying cause of a 500, attached to the response extensions.
///
/// Only the debug router reads it back into the body; otherwise clients see
/// the generic message.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

/// Render the failure envelope for `status`
pub fn error_envelope(
    status: StatusCode,
    message: String,
    errors: Option<BTreeMap<String, Vec<String>>>,
) -> Response {
    let body = ErrorResponse {
        success: false,
        message,
        errors,
        status_code: status.as_u16(),
    };

    (status, Json(body)).into_response()
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) | AppError::InvalidFields(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Conflict(msg) | AppError::NotFound(msg) => {
                msg.clone()
            }
            AppError::BadRequest(msg) => format!("Invalid input: {}", msg),

            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }

    /// Whether the store rejected a write because of a unique index.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            AppError::Database(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.user_message();
        let (errors, detail) = match self {
            AppError::InvalidFields(fields) => (Some(fields), None),
            AppError::Database(e) => (None, Some(e.to_string())),
            AppError::Internal(msg) => (None, Some(msg)),
            _ => (None, None),
        };

        let mut response = error_envelope(status, message, errors);
        if let Some(detail) = detail {
            response.extensions_mut().insert(ErrorDetail(detail));
        }
        response
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, message: impl Into<String>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: impl Into<String>) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(message.into()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

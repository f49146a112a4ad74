use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_model::FieldViolation;
use serde_json::json;
use std::fmt;

use crate::store::StoreError;

pub type AppResult<T> = Result<T, AppError>;

/// Client-facing error: a status, a message, and optionally the list of
/// field-level violations behind a validation failure.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub violations: Vec<FieldViolation>,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            violations: Vec::new(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// A 400 carrying every accumulated field violation.
    pub fn validation(
        message: impl Into<String>,
        violations: Vec<FieldViolation>,
    ) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            violations,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = if self.violations.is_empty() {
            json!({
                "error": {
                    "message": self.message,
                    "status": self.status.as_u16(),
                }
            })
        } else {
            json!({
                "error": {
                    "message": self.message,
                    "status": self.status.as_u16(),
                    "fields": self.violations,
                }
            })
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(msg) => Self::conflict(msg),
            other => Self::internal(other.to_string()),
        }
    }
}

//! Error types for the inventory API
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{ErrorResponse, FieldErrors};

// == Api Error Enum ==
/// Unified error type for request handling.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No item with the requested identifier
    #[error("Item not found: {0}")]
    NotFound(String),

    /// Payload failed field validation
    #[error("Validation failed")]
    Validation(FieldErrors),

    /// Body could not be read as JSON
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Missing or unknown credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Store backend failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        let body = match self {
            ApiError::Validation(fields) => ErrorResponse::with_fields(message, fields),
            _ => ErrorResponse::new(message),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the inventory API.
pub type Result<T> = std::result::Result<T, ApiError>;

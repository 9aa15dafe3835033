/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `ApiResult<T>` which converts to the appropriate
/// status code and a `{"error": "..."}` JSON body.
///
/// Two mappings are deliberate parts of the public contract:
///
/// - a duplicate signup email answers 400, not 409;
/// - a missing resource and a resource owned by somebody else answer the
///   same 404, so a client cannot probe which task ids exist.
///
/// Store failures are logged with their engine detail server-side and
/// surfaced to the client only as a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (400) — missing or malformed input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Unauthorized (401) — bad credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Not found (404) — also covers "exists but not yours"
    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate resource — answered with 400 per the public contract
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error (500)
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalError(detail) => {
                // Engine detail stays in the server log
                tracing::error!(error = %detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Convert sqlx errors to API errors
///
/// The only unique index in the schema is `users.email`, so a unique
/// violation can be translated to the signup conflict message even when
/// the handler's defensive pre-check lost a race to a concurrent insert.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Task not found".to_string()),
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation() && db_err.message().contains("users.email") =>
            {
                ApiError::Conflict("Email already registered".to_string())
            }
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

/// Convert validation errors to API errors
///
/// The payload validators attach the exact public message to every
/// failure; the first one becomes the response body.
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, field_errors)| field_errors.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());

        ApiError::BadRequest(message)
    }
}

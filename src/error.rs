//! Error types for the key-value store
//!
//! Store outcomes are plain `Result` values; the HTTP adapter maps them
//! onto status codes and JSON bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Store Error Enum ==
/// Failure outcomes of store operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Create on a key that is present and not expired
    #[error("Key already exists.")]
    AlreadyExists,

    /// Read, update or delete on a key that is absent or expired
    #[error("Key not found.")]
    NotFound,
}

impl StoreError {
    /// HTTP status used when this outcome reaches a client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::AlreadyExists => StatusCode::BAD_REQUEST,
            StoreError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

// == API Error Enum ==
/// Errors surfaced by the HTTP adapter.
///
/// Store failures on mutating endpoints are reported under a `message`
/// field, while lookups and transport failures use an `error` field.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed payload, missing field or missing query parameter
    #[error("{0}")]
    InvalidRequest(String),

    /// Store rejection of a create, update or delete
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Store rejection of a read
    #[error(transparent)]
    Lookup(StoreError),

    /// No route matches the request path
    #[error("Not found")]
    RouteNotFound,

    /// The path exists but not for this method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Request body exceeds the configured body limit
    #[error("Payload too large")]
    PayloadTooLarge,
}

impl ApiError {
    /// Shorthand for a transport-level validation failure.
    pub fn invalid(message: impl Into<String>) -> Self {
        ApiError::InvalidRequest(message.into())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, body) = match &self {
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            ApiError::Store(err) => (err.status_code(), json!({ "message": message })),
            ApiError::Lookup(err) => (err.status_code(), json!({ "error": message })),
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, json!({ "error": message })),
            ApiError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, json!({ "error": message }))
            }
            ApiError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, json!({ "error": message })),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Aliases ==
/// Result of a store operation.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result of an HTTP handler.
pub type Result<T> = std::result::Result<T, ApiError>;

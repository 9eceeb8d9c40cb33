//! API Handlers
//!
//! HTTP request handlers for each endpoint. Every handler validates the
//! request shape and then makes at most one store call.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::requests::{INVALID_BODY_MESSAGE, MISSING_KEY_MESSAGE};
use crate::models::{
    parse_body, CreateRequest, HealthResponse, KeyQuery, KeysResponse, MessageResponse,
    ReadResponse, UpdateRequest,
};
use crate::store::{KvStore, StoreMetrics};

/// Application state shared across all handlers.
///
/// Holds the one store instance the server was built with.
#[derive(Clone)]
pub struct AppState {
    /// Shared key-value store
    pub store: Arc<KvStore>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: KvStore) -> Self {
        Self::from_shared(Arc::new(store))
    }

    /// Creates a new AppState around an already shared store.
    pub fn from_shared(store: Arc<KvStore>) -> Self {
        Self { store }
    }
}

/// Query extractor that leaves rejections to the handler.
///
/// Decoded as raw pairs so a repeated `key` parameter is not a rejection.
type KeyQueryResult = std::result::Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Body extractor that leaves rejections to the handler.
type BodyResult = std::result::Result<Bytes, BytesRejection>;

fn requested_key(query: KeyQueryResult) -> Result<String> {
    let Query(pairs) = query.map_err(|_| ApiError::invalid(MISSING_KEY_MESSAGE))?;
    KeyQuery::from_pairs(pairs).into_key()
}

/// Unwraps the buffered body, reporting an over-limit body as 413.
fn request_body(body: BodyResult) -> Result<Bytes> {
    body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::invalid(INVALID_BODY_MESSAGE)
        }
    })
}

/// Handler for GET /store?key=K
///
/// Returns the key and its value.
pub async fn read_handler(
    State(state): State<AppState>,
    query: KeyQueryResult,
) -> Result<Json<ReadResponse>> {
    let key = requested_key(query)?;
    let value = state.store.read(&key).await.map_err(ApiError::Lookup)?;

    Ok(Json(ReadResponse::new(key, value)))
}

/// Handler for POST /store
///
/// Creates a key with an optional TTL.
pub async fn create_handler(
    State(state): State<AppState>,
    body: BodyResult,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let req: CreateRequest = parse_body(&request_body(body)?)?;
    req.validate()?;

    state.store.create(req.key, req.value, req.ttl).await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::created())))
}

/// Handler for PUT /store
///
/// Replaces the value of an existing key, keeping its expiry.
pub async fn update_handler(
    State(state): State<AppState>,
    body: BodyResult,
) -> Result<Json<MessageResponse>> {
    let req: UpdateRequest = parse_body(&request_body(body)?)?;
    req.validate()?;

    state.store.update(&req.key, req.value).await?;

    Ok(Json(MessageResponse::updated()))
}

/// Handler for DELETE /store?key=K
pub async fn delete_handler(
    State(state): State<AppState>,
    query: KeyQueryResult,
) -> Result<Json<MessageResponse>> {
    let key = requested_key(query)?;
    state.store.delete(&key).await?;

    Ok(Json(MessageResponse::deleted()))
}

/// Handler for GET /keys
///
/// Lists live keys; expired keys met during the scan are purged.
pub async fn keys_handler(State(state): State<AppState>) -> Json<KeysResponse> {
    let keys = state.store.list_keys().await;
    Json(KeysResponse { keys })
}

/// Handler for GET /metrics
pub async fn metrics_handler(State(state): State<AppState>) -> Json<StoreMetrics> {
    Json(state.store.metrics().await)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Fallback for paths no route matches.
pub async fn not_found_handler() -> ApiError {
    ApiError::RouteNotFound
}

/// Fallback for known paths called with an unsupported method.
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}

//! Request DTOs for the key-value store API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::error::ApiError;

/// Message returned for any body that fails to parse into a request DTO.
pub const INVALID_BODY_MESSAGE: &str = "Invalid JSON or missing fields";

/// Message returned when the `key` query parameter is absent or empty.
pub const MISSING_KEY_MESSAGE: &str = "Missing 'key'";

/// Message returned when a body carries an empty key.
pub const EMPTY_KEY_MESSAGE: &str = "Key cannot be empty";

/// Parses a raw request body, regardless of its declared content type.
///
/// Only JSON objects are accepted; serde would otherwise also map a JSON
/// array positionally onto the DTO fields.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let invalid = |_: serde_json::Error| ApiError::invalid(INVALID_BODY_MESSAGE);

    let json: Value = serde_json::from_slice(body).map_err(invalid)?;
    if !json.is_object() {
        return Err(ApiError::invalid(INVALID_BODY_MESSAGE));
    }
    serde_json::from_value(json).map_err(invalid)
}

fn require_key(key: &str) -> Result<(), ApiError> {
    if key.is_empty() {
        return Err(ApiError::invalid(EMPTY_KEY_MESSAGE));
    }
    Ok(())
}

/// Request body for the create operation (POST /store)
///
/// # Fields
/// - `key`: The key to create
/// - `value`: Any JSON value; stored as-is
/// - `ttl`: Optional TTL in seconds, `0` meaning no expiry
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequest {
    pub key: String,
    pub value: Value,
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl CreateRequest {
    /// Validates the request data.
    pub fn validate(&self) -> Result<(), ApiError> {
        require_key(&self.key)
    }
}

/// Request body for the update operation (PUT /store)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    pub key: String,
    pub value: Value,
}

impl UpdateRequest {
    /// Validates the request data.
    pub fn validate(&self) -> Result<(), ApiError> {
        require_key(&self.key)
    }
}

/// Query string of GET and DELETE /store
#[derive(Debug, Clone, Default)]
pub struct KeyQuery {
    pub key: Option<String>,
}

impl KeyQuery {
    /// Builds the query from decoded `name=value` pairs.
    ///
    /// A repeated `key` parameter resolves to its first non-empty value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let key = pairs
            .into_iter()
            .find(|(name, value)| name == "key" && !value.is_empty())
            .map(|(_, value)| value);
        Self { key }
    }

    /// Returns the requested key, rejecting an absent or empty one.
    pub fn into_key(self) -> Result<String, ApiError> {
        match self.key {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ApiError::invalid(MISSING_KEY_MESSAGE)),
        }
    }
}

//! Response DTOs for the key-value store API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

/// Response body for the read operation (GET /store)
#[derive(Debug, Clone, Serialize)]
pub struct ReadResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: Value,
}

impl ReadResponse {
    /// Creates a new ReadResponse
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Body of every successful mutation (create, update, delete)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn created() -> Self {
        Self::new("Created.")
    }

    pub fn updated() -> Self {
        Self::new("Updated.")
    }

    pub fn deleted() -> Self {
        Self::new("Deleted.")
    }

    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Response body for the key listing endpoint (GET /keys)
#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    /// Live keys, in no particular order
    pub keys: Vec<String>,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status, always "ok" while the server answers
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_response_serialize() {
        let resp = ReadResponse::new("test_key", json!({"n": 1}));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, json!({"key": "test_key", "value": {"n": 1}}));
    }

    #[test]
    fn test_message_responses() {
        assert_eq!(
            serde_json::to_value(MessageResponse::created()).unwrap(),
            json!({"message": "Created."})
        );
        assert_eq!(MessageResponse::updated().message, "Updated.");
        assert_eq!(MessageResponse::deleted().message, "Deleted.");
    }

    #[test]
    fn test_health_response_serialize() {
        let json = serde_json::to_value(HealthResponse::ok()).unwrap();
        assert_eq!(json, json!({"status": "ok"}));
    }
}

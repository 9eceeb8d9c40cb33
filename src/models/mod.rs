//! Request and Response models for the key-value store API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{parse_body, CreateRequest, KeyQuery, UpdateRequest};
pub use responses::{HealthResponse, KeysResponse, MessageResponse, ReadResponse};

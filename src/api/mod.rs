//! API Module
//!
//! HTTP handlers and routing for the key-value store REST API.
//!
//! # Endpoints
//! - `GET /store?key=K` - Read a value
//! - `POST /store` - Create a key
//! - `PUT /store` - Update a key
//! - `DELETE /store?key=K` - Delete a key
//! - `GET /keys` - List live keys
//! - `GET /metrics` - Store metrics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

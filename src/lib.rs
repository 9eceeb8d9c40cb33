//! KV Store - An in-memory key-value store server
//!
//! Stores opaque JSON values under string keys with optional per-key TTL.
//! Expired entries are purged lazily by whichever operation touches them.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{ApiError, StoreError};
pub use store::{KvStore, StoreMetrics};

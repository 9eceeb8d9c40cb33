//! Store Module
//!
//! Provides the in-memory key-value store with lazy TTL expiry.

mod expiry;
mod kv_store;
mod metrics;


// Re-export public types
pub use kv_store::KvStore;
pub use metrics::StoreMetrics;

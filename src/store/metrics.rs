//! Store Metrics Module
//!
//! Point-in-time counters reported by the metrics operation.

use serde::Serialize;

// == Store Metrics ==
/// Snapshot of store occupancy taken inside a single critical section.
///
/// `total_keys` is counted before the expiry scan of that call, while
/// `valid_keys` and `ttl_keys` reflect the state after it. A store holding
/// expired-but-untouched keys therefore reports `total_keys > valid_keys`.
///
/// Serialized as-is as the body of `GET /metrics`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreMetrics {
    /// Whole seconds since the store was constructed
    pub uptime_seconds: u64,
    /// Physically stored keys, expired ones included
    pub total_keys: usize,
    /// Keys that survived the expiry scan
    pub valid_keys: usize,
    /// Live keys that carry a TTL
    pub ttl_keys: usize,
}

//! Key-Value Store Module
//!
//! The store keeps two co-indexed maps behind one lock: values keyed by name
//! and expiry instants for the subset of keys stored with a TTL. Expired
//! entries are never swept in the background; any operation that touches an
//! expired key purges it from both maps before answering.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::expiry::{elapsed_seconds, expiry_after, has_passed};
use crate::store::StoreMetrics;

// == Store State ==
/// The data guarded by the store lock.
///
/// Invariant: every key of `expiry` is also a key of `data`.
#[derive(Debug, Default)]
struct StoreState {
    /// Stored values
    data: HashMap<String, Value>,
    /// Expiry instants of TTL'd keys
    expiry: HashMap<String, DateTime<Utc>>,
}

impl StoreState {
    // == Expiry Check ==
    /// Purges `key` from both maps if its expiry instant has passed.
    ///
    /// Returns `true` only when this call removed the key. A key that is
    /// absent, or was purged earlier, reports `false`.
    fn purge_if_expired(&mut self, key: &str, now: DateTime<Utc>) -> bool {
        match self.expiry.get(key) {
            Some(&expires_at) if has_passed(expires_at, now) => {
                self.expiry.remove(key);
                self.data.remove(key);
                debug!(key, "Purged expired key");
                true
            }
            _ => false,
        }
    }

    /// Returns true if `key` is stored and survives an expiry check.
    fn is_live(&mut self, key: &str, now: DateTime<Utc>) -> bool {
        self.data.contains_key(key) && !self.purge_if_expired(key, now)
    }

    /// Runs the expiry check over every stored key and returns the survivors.
    fn live_keys(&mut self, now: DateTime<Utc>) -> Vec<String> {
        let snapshot: Vec<String> = self.data.keys().cloned().collect();
        snapshot
            .into_iter()
            .filter(|key| !self.purge_if_expired(key, now))
            .collect()
    }
}

// == Key-Value Store ==
/// In-memory key-value store with optional per-key TTL.
///
/// Every public operation acquires the lock exactly once and holds it for the
/// whole operation, expiry purges included, so operations on one store are
/// linearizable. Values are handed out by clone.
#[derive(Debug)]
pub struct KvStore {
    /// Both maps, behind a single lock
    state: Mutex<StoreState>,
    /// Construction time, for uptime reporting
    started_at: DateTime<Utc>,
}

impl KvStore {
    // == Constructor ==
    /// Creates an empty store and records its start time.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            started_at: Utc::now(),
        }
    }

    // == Create ==
    /// Stores a new key-value pair with an optional TTL.
    ///
    /// A key that is present but expired is replaced as if it were absent.
    /// Creating over a previously TTL'd key without a TTL clears the old
    /// expiry instant.
    ///
    /// # Arguments
    /// * `key` - The key to create
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL in seconds; `None` or `Some(0)` means no expiry
    ///
    /// # Errors
    /// `StoreError::AlreadyExists` if the key is live. Nothing is mutated.
    pub async fn create(
        &self,
        key: impl Into<String>,
        value: Value,
        ttl: Option<u64>,
    ) -> StoreResult<()> {
        let key = key.into();
        let mut state = self.state.lock().await;
        let now = Utc::now();

        if state.is_live(&key, now) {
            return Err(StoreError::AlreadyExists);
        }

        match ttl.and_then(|seconds| expiry_after(now, seconds)) {
            Some(expires_at) => {
                state.expiry.insert(key.clone(), expires_at);
            }
            None => {
                state.expiry.remove(&key);
            }
        }
        debug!(key = %key, ttl = ?ttl, "Created key");
        state.data.insert(key, value);

        Ok(())
    }

    // == Read ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// # Errors
    /// `StoreError::NotFound` if the key is absent or expired.
    pub async fn read(&self, key: &str) -> StoreResult<Value> {
        let mut state = self.state.lock().await;
        let now = Utc::now();

        if !state.is_live(key, now) {
            return Err(StoreError::NotFound);
        }
        state.data.get(key).cloned().ok_or(StoreError::NotFound)
    }

    // == Update ==
    /// Replaces the value of an existing key.
    ///
    /// The expiry instant is left as it was; updating never extends a TTL.
    ///
    /// # Errors
    /// `StoreError::NotFound` if the key is absent or expired. Update never creates.
    pub async fn update(&self, key: &str, value: Value) -> StoreResult<()> {
        let mut state = self.state.lock().await;
        let now = Utc::now();

        if !state.is_live(key, now) {
            return Err(StoreError::NotFound);
        }
        match state.data.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    // == Delete ==
    /// Removes a key and its expiry instant.
    ///
    /// # Errors
    /// `StoreError::NotFound` if the key is absent or expired.
    pub async fn delete(&self, key: &str) -> StoreResult<()> {
        let mut state = self.state.lock().await;
        let now = Utc::now();

        if !state.is_live(key, now) {
            return Err(StoreError::NotFound);
        }
        state.data.remove(key);
        state.expiry.remove(key);
        debug!(key, "Deleted key");

        Ok(())
    }

    // == Expires At ==
    /// Returns the expiry instant of a live key, `None` if it has no TTL.
    ///
    /// # Errors
    /// `StoreError::NotFound` if the key is absent or expired.
    pub async fn expires_at(&self, key: &str) -> StoreResult<Option<DateTime<Utc>>> {
        let mut state = self.state.lock().await;
        let now = Utc::now();

        if !state.is_live(key, now) {
            return Err(StoreError::NotFound);
        }
        Ok(state.expiry.get(key).copied())
    }

    // == List Keys ==
    /// Returns every live key, in no particular order.
    ///
    /// Expired keys found during the scan are purged.
    pub async fn list_keys(&self) -> Vec<String> {
        let mut state = self.state.lock().await;
        let now = Utc::now();
        state.live_keys(now)
    }

    // == Metrics ==
    /// Reports uptime and key counts.
    ///
    /// `total_keys` is taken before the expiry scan; `valid_keys` and
    /// `ttl_keys` after it.
    pub async fn metrics(&self) -> StoreMetrics {
        let mut state = self.state.lock().await;
        let now = Utc::now();

        let total_keys = state.data.len();
        let valid_keys = state.live_keys(now).len();
        let ttl_keys = state.expiry.len();

        StoreMetrics {
            uptime_seconds: elapsed_seconds(self.started_at, now),
            total_keys,
            valid_keys,
            ttl_keys,
        }
    }

    // == Length ==
    /// Returns the number of physically stored keys, expired ones included.
    pub async fn len(&self) -> usize {
        self.state.lock().await.data.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is physically stored.
    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.data.is_empty()
    }
}

impl Default for KvStore {
    fn default() -> Self {
        Self::new()
    }
}

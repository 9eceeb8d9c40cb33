//! Expiry Module
//!
//! Wall-clock deadline arithmetic for entries stored with a TTL.

use chrono::{DateTime, TimeDelta, Utc};

// == Expiry Instant ==
/// Computes the absolute expiry instant for a TTL given in seconds.
///
/// # Returns
/// - `None` if `ttl_seconds` is zero (no expiry)
/// - `None` if the deadline lies beyond what `DateTime<Utc>` can represent,
///   so the entry never expires
/// - `Some(now + ttl_seconds)` otherwise
pub fn expiry_after(now: DateTime<Utc>, ttl_seconds: u64) -> Option<DateTime<Utc>> {
    if ttl_seconds == 0 {
        return None;
    }
    let seconds = i64::try_from(ttl_seconds).ok()?;
    let ttl = TimeDelta::try_seconds(seconds)?;
    now.checked_add_signed(ttl)
}

// == Has Passed ==
/// Checks whether an expiry instant has passed.
///
/// Boundary condition: an entry is expired only when `now` is strictly after
/// its expiry instant. At the exact instant it is still readable.
pub fn has_passed(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now > expires_at
}

// == Elapsed Seconds ==
/// Whole seconds from `start` to `now`, clamped at zero if the clock stepped back.
pub fn elapsed_seconds(start: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    u64::try_from((now - start).num_seconds()).unwrap_or(0)
}

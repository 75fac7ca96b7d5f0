//! Cache Entry Module
//!
//! A cached item copy with a fixed expiration deadline.

use std::time::{Duration, Instant};

use crate::models::Item;

/// Longest lifetime an entry can be given. Larger TTLs are clamped to this.
pub const MAX_ENTRY_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

// == Cache Entry ==
/// Represents a single cache entry with value and expiry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached item
    pub value: Item,
    /// Deadline after which the entry is no longer served
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry that expires `ttl` from now.
    ///
    /// The TTL is capped at [`MAX_ENTRY_TTL`] so the deadline always fits in an `Instant`.
    pub fn new(value: Item, ttl: Duration) -> Self {
        let now = Instant::now();
        let expires_at = now
            .checked_add(ttl.min(MAX_ENTRY_TTL))
            .unwrap_or(now);
        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its deadline, so a
    /// zero TTL is expired immediately.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

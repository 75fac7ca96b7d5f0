//! Cache Module
//!
//! Read-through cache for items. Handlers only see the [`ItemCache`] trait;
//! [`MemoryCache`] is the in-process backend with TTL expiration.

mod entry;
mod memory;
mod stats;

#[cfg(test)]
mod property_tests;

use std::time::Duration;

use async_trait::async_trait;

use crate::models::{Item, ItemId};

// Re-export public types
pub use entry::CacheEntry;
pub use memory::MemoryCache;
pub use stats::CacheStats;

// == Public Constants ==
/// Default lifetime of a cached item (15 minutes)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

/// Cache key for an item id.
pub fn cache_key(id: ItemId) -> String {
    format!("item_{}", id)
}

// == Item Cache ==
/// Key-value cache contract used by the request handlers.
///
/// None of the operations can fail: a backend that loses an entry only costs
/// a store lookup on the next read.
#[async_trait]
pub trait ItemCache: Send + Sync {
    /// Returns the cached item, or None when absent or expired.
    async fn get(&self, key: &str) -> Option<Item>;

    /// Stores an item under `key` for `ttl`, replacing any previous entry.
    async fn set(&self, key: &str, item: Item, ttl: Duration);

    /// Removes the entry for `key` if present.
    async fn delete(&self, key: &str);
}

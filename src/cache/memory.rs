//! In-Memory Cache Module
//!
//! HashMap-backed [`ItemCache`] with per-entry TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, ItemCache};
use crate::models::Item;

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

// == Memory Cache ==
/// Process-local cache shared across request tasks.
///
/// Expired entries are dropped lazily on read and in bulk by
/// [`MemoryCache::cleanup_expired`].
#[derive(Debug, Default)]
pub struct MemoryCache {
    inner: RwLock<Inner>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub async fn stats(&self) -> CacheStats {
        let inner = self.inner.read().await;
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns how many were dropped.
    pub async fn cleanup_expired(&self) -> usize {
        let mut inner = self.inner.write().await;
        let before = inner.entries.len();
        inner.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - inner.entries.len();

        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
        removed
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}

#[async_trait]
impl ItemCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<Item> {
        // Write lock: expired entries are removed and stats are updated
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        match inner.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                inner.stats.record_hit();
                return Some(entry.value.clone());
            }
            Some(_) => {
                inner.entries.remove(key);
                debug!(key, "cache entry expired");
            }
            None => {}
        }

        inner.stats.record_miss();
        inner.stats.set_total_entries(inner.entries.len());
        None
    }

    async fn set(&self, key: &str, item: Item, ttl: Duration) {
        let mut inner = self.inner.write().await;
        inner
            .entries
            .insert(key.to_string(), CacheEntry::new(item, ttl));
        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
    }

    async fn delete(&self, key: &str) {
        let mut inner = self.inner.write().await;
        if inner.entries.remove(key).is_some() {
            inner.stats.record_invalidation();
            let len = inner.entries.len();
            inner.stats.set_total_entries(len);
        }
    }
}

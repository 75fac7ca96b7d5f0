//! Cache Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCache;
use crate::config::MIN_CLEANUP_INTERVAL;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// Reads already skip expired entries, so this only bounds memory held by
/// items that are never read again.
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(MemoryCache::new());
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: Arc<MemoryCache>, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let secs = cleanup_interval_secs.max(MIN_CLEANUP_INTERVAL);
    spawn_cleanup_every(cache, Duration::from_secs(secs))
}

fn spawn_cleanup_every(cache: Arc<MemoryCache>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(interval = ?interval, "Starting cache cleanup task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;

            if removed > 0 {
                let stats = cache.stats().await;
                info!(
                    removed,
                    remaining = stats.total_entries,
                    hit_rate = stats.hit_rate(),
                    "Cache cleanup: removed expired entries"
                );
            } else {
                debug!("Cache cleanup: no expired entries found");
            }
        }
    })
}

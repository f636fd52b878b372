//! Stats Reporter Task
//!
//! Background task that periodically logs aggregated cache statistics.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{CacheStats, ShardedCache};

/// Spawns a background task that logs cache statistics every
/// `interval_secs` seconds.
///
/// Returns `None` without spawning when `interval_secs` is zero. The
/// handle is aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(ShardedCache::new(4, 700_000));
/// let reporter = spawn_stats_reporter(cache.clone(), 60);
/// // Later, during shutdown:
/// if let Some(handle) = reporter { handle.abort(); }
/// ```
pub fn spawn_stats_reporter(
    cache: Arc<ShardedCache>,
    interval_secs: u64,
) -> Option<JoinHandle<()>> {
    if interval_secs == 0 {
        debug!("Stats reporter disabled");
        return None;
    }
    let interval = Duration::from_secs(interval_secs);

    Some(tokio::spawn(async move {
        info!(
            "Starting stats reporter with interval of {} seconds",
            interval_secs
        );

        let mut last_evictions = 0;
        loop {
            tokio::time::sleep(interval).await;

            let stats = cache.stats();
            log_stats(&stats, stats.evictions.saturating_sub(last_evictions));
            last_evictions = stats.evictions;
        }
    }))
}

/// Logs one snapshot; `new_evictions` counts evictions since the previous report.
pub(crate) fn log_stats(stats: &CacheStats, new_evictions: u64) {
    info!(
        entries = stats.total_entries,
        shards = stats.shard_count,
        hits = stats.hits,
        misses = stats.misses,
        hit_rate = stats.hit_rate(),
        evictions = stats.evictions,
        new_evictions,
        "cache stats"
    );
}

//! Cache Statistics Module
//!
//! Point-in-time counters aggregated across shards.

// == Cache Stats ==
/// Aggregated cache counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    /// Lookups that found a value
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
    /// Occupants dropped to stay within shard capacity
    pub evictions: u64,
    /// Occupants currently stored
    pub total_entries: usize,
    /// Number of shards after rounding
    pub shard_count: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates zeroed stats for a cache with `shard_count` shards.
    pub fn new(shard_count: usize) -> Self {
        Self {
            shard_count,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing was looked up.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

//! Sharded Cache Module
//!
//! Routes every key to one of N independent shards so writes to
//! different shards never contend on a lock.

use crate::cache::{djb2_hash, CacheStats, Shard, MAX_SHARD_COUNT};

// == Sharded Cache ==
/// A single logical key-value store backed by a power-of-two number of
/// shards.
///
/// The shard vector and mask are fixed at construction, so routing needs
/// no synchronization and a key always lands on the same shard.
#[derive(Debug)]
pub struct ShardedCache {
    shards: Vec<Shard>,
    mask: u64,
}

impl ShardedCache {
    // == Constructor ==
    /// Creates a cache with `shard_count` rounded up to the next power of
    /// two (zero becomes one, anything above `MAX_SHARD_COUNT` is clamped),
    /// each shard holding at most `shard_capacity` occupants.
    pub fn new(shard_count: usize, shard_capacity: usize) -> Self {
        let count = shard_count
            .min(MAX_SHARD_COUNT)
            .checked_next_power_of_two()
            .unwrap_or(MAX_SHARD_COUNT);
        let shards = (0..count).map(|_| Shard::new(shard_capacity)).collect();

        Self {
            shards,
            mask: (count - 1) as u64,
        }
    }

    // == Routing ==
    /// Returns the index of the shard responsible for `key`.
    #[inline]
    pub fn shard_index(&self, key: &str) -> usize {
        (djb2_hash(key) & self.mask) as usize
    }

    #[inline]
    fn shard_for(&self, key: &str) -> &Shard {
        &self.shards[self.shard_index(key)]
    }

    // == Put ==
    /// Inserts or overwrites `key` in its shard.
    pub fn put(&self, key: String, value: String) {
        self.shard_for(&key).put(key, value);
    }

    // == Get ==
    /// Looks `key` up in its shard.
    pub fn get(&self, key: &str) -> Option<String> {
        self.shard_for(key).get(key)
    }

    /// Number of shards after rounding.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Total occupants across all shards.
    ///
    /// Shards are read one after another, so under concurrent writes the
    /// sum is not a point-in-time snapshot.
    pub fn len(&self) -> usize {
        self.shards.iter().map(Shard::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(Shard::is_empty)
    }

    // == Stats ==
    /// Aggregates counters from every shard.
    pub fn stats(&self) -> CacheStats {
        self.shards
            .iter()
            .fold(CacheStats::new(self.shard_count()), |mut stats, shard| {
                stats.hits += shard.hits();
                stats.misses += shard.misses();
                stats.evictions += shard.evictions();
                stats.total_entries += shard.len();
                stats
            })
    }
}

impl Default for ShardedCache {
    fn default() -> Self {
        Self::new(
            crate::cache::DEFAULT_SHARD_COUNT,
            crate::cache::DEFAULT_SHARD_CAPACITY,
        )
    }
}

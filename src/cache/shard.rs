//! Cache Shard Module
//!
//! One independently locked partition of the key space.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::debug;

// == Shard Storage ==
/// Map, key list and occupant counter, always mutated under the same
/// write lock.
///
/// `keys` holds every stored key exactly once so a victim can be picked
/// by index in O(1) instead of by scanning the map's buckets.
#[derive(Debug, Default)]
struct ShardInner {
    items: HashMap<String, String>,
    keys: Vec<String>,
    count: usize,
    cursor: usize,
}

impl ShardInner {
    /// Removes one occupant, returning false if the shard is empty.
    ///
    /// The victim index rotates through the key list. The last slot is
    /// skipped while other keys exist, so the most recent insert is never
    /// the victim of the very next write.
    fn evict_one(&mut self) -> bool {
        let span = match self.keys.len() {
            0 => return false,
            1 => 1,
            n => n - 1,
        };
        let index = self.cursor % span;
        self.cursor = index + 1;

        let victim = self.keys.swap_remove(index);
        self.items.remove(&victim);
        self.count -= 1;
        true
    }

    fn insert(&mut self, key: String, value: String) {
        match self.items.get_mut(&key) {
            Some(slot) => *slot = value,
            None => {
                self.keys.push(key.clone());
                self.items.insert(key, value);
                self.count += 1;
            }
        }
    }
}

// == Shard ==
/// Bounded key-value storage guarded by a reader-writer lock.
///
/// When a write finds the shard full, one arbitrary occupant is dropped
/// before the new entry goes in. No recency or frequency is tracked, so
/// callers must not expect any particular key to survive eviction.
#[derive(Debug)]
pub struct Shard {
    inner: RwLock<ShardInner>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl Shard {
    // == Constructor ==
    /// Creates an empty shard holding at most `capacity` occupants.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(ShardInner::default()),
            capacity: capacity.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    // == Put ==
    /// Inserts or overwrites `key`.
    ///
    /// At capacity, exactly one occupant is evicted first, even when the
    /// write is an overwrite of an existing key.
    pub fn put(&self, key: String, value: String) {
        let mut inner = self.inner.write();

        if inner.count >= self.capacity && inner.evict_one() {
            self.evictions.fetch_add(1, Ordering::Relaxed);
            debug!(capacity = self.capacity, "shard at capacity, evicted one occupant");
        }

        inner.insert(key, value);
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = self.inner.read().items.get(key).cloned();
        match value {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        value
    }

    /// Returns the current number of occupants.
    pub fn len(&self) -> usize {
        self.inner.read().count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of occupants.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub(crate) fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub(crate) fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Lengths of the map and the key list, which must always match `len()`.
    #[cfg(test)]
    fn storage_lens(&self) -> (usize, usize) {
        let inner = self.inner.read();
        (inner.items.len(), inner.keys.len())
    }
}

impl Default for Shard {
    fn default() -> Self {
        Self::new(crate::cache::DEFAULT_SHARD_CAPACITY)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shard_put_and_get() {
        let shard = Shard::default();

        shard.put("key1".to_string(), "value1".to_string());

        assert_eq!(shard.get("key1").as_deref(), Some("value1"));
        assert_eq!(shard.len(), 1);
    }

    #[test]
    fn test_shard_get_missing() {
        let shard = Shard::default();

        assert!(shard.get("nonexistent").is_none());
        assert!(shard.is_empty());
    }

    #[test]
    fn test_shard_overwrite_keeps_count() {
        let shard = Shard::default();

        shard.put("key1".to_string(), "value1".to_string());
        shard.put("key1".to_string(), "value2".to_string());

        assert_eq!(shard.get("key1").as_deref(), Some("value2"));
        assert_eq!(shard.len(), 1);
    }

    #[test]
    fn test_shard_eviction_accepts_new_key() {
        let shard = Shard::new(16);

        for i in 0..17 {
            shard.put(format!("key{}", i), "value".to_string());
        }
        shard.put("finalkey".to_string(), "finalvalue".to_string());

        assert_eq!(shard.get("finalkey").as_deref(), Some("finalvalue"));
        assert_eq!(shard.len(), 16);
        assert_eq!(shard.storage_lens(), (16, 16));
        assert_eq!(shard.evictions(), 2);
    }

    #[test]
    fn test_shard_overwrite_at_capacity_evicts_one() {
        let shard = Shard::new(2);

        shard.put("a".to_string(), "1".to_string());
        shard.put("b".to_string(), "2".to_string());
        shard.put("a".to_string(), "3".to_string());

        assert_eq!(shard.get("a").as_deref(), Some("3"));
        assert_eq!(shard.evictions(), 1);
        assert_eq!(shard.storage_lens(), (shard.len(), shard.len()));
        assert!(shard.len() <= 2);
    }

    #[test]
    fn test_shard_stays_full_under_sustained_eviction() {
        let capacity = 64;
        let shard = Shard::new(capacity);

        for i in 0..capacity {
            shard.put(format!("seed{}", i), "v".to_string());
        }
        for i in 0..10_000 {
            shard.put(format!("churn{}", i), i.to_string());
            assert_eq!(shard.len(), capacity);
            assert_eq!(shard.storage_lens(), (capacity, capacity));
        }

        assert_eq!(shard.evictions(), 10_000);
        assert_eq!(shard.get("churn9999").as_deref(), Some("9999"));
    }

    #[test]
    fn test_shard_latest_insert_survives_next_eviction() {
        let shard = Shard::new(8);

        for i in 0..8 {
            shard.put(format!("seed{}", i), "v".to_string());
        }
        for i in 0..1000 {
            shard.put(format!("key{}", i), "v".to_string());
            shard.put(format!("next{}", i), "v".to_string());
            assert!(
                shard.get(&format!("key{}", i)).is_some(),
                "key{} was evicted by the following write",
                i
            );
        }
    }

    #[test]
    fn test_shard_zero_capacity_clamped() {
        let shard = Shard::new(0);
        assert_eq!(shard.capacity(), 1);

        shard.put("a".to_string(), "1".to_string());
        shard.put("b".to_string(), "2".to_string());

        assert_eq!(shard.len(), 1);
        assert_eq!(shard.get("b").as_deref(), Some("2"));
        assert!(shard.get("a").is_none());
    }

    #[test]
    fn test_shard_tolerates_max_size_entries() {
        let shard = Shard::default();
        let key = "k".repeat(256);
        let value = "v".repeat(256);

        shard.put(key.clone(), value.clone());
        assert_eq!(shard.get(&key), Some(value));
    }

    #[test]
    fn test_shard_hit_miss_counters() {
        let shard = Shard::default();
        shard.put("key1".to_string(), "value1".to_string());

        shard.get("key1");
        shard.get("key1");
        shard.get("missing");

        assert_eq!(shard.hits(), 2);
        assert_eq!(shard.misses(), 1);
    }
}

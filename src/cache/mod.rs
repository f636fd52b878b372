//! Cache Module
//!
//! Sharded in-memory key-value storage with per-shard locking and
//! capacity-bounded eviction.

mod hash;
mod shard;
mod sharded;
mod stats;


// Re-export public types
pub use hash::djb2_hash;
pub use shard::Shard;
pub use sharded::ShardedCache;
pub use stats::CacheStats;

// == Public Constants ==
/// Default number of shards requested at startup
pub const DEFAULT_SHARD_COUNT: usize = 4;

/// Upper bound on the shard count; larger requests are clamped to it
pub const MAX_SHARD_COUNT: usize = 1 << 16;

/// Default maximum number of occupants per shard
pub const DEFAULT_SHARD_CAPACITY: usize = 700_000;

/// Default byte limit for keys and values, enforced at the HTTP boundary
pub const DEFAULT_MAX_KEY_VALUE_SIZE: usize = 256;

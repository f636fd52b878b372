//! shardkv - A sharded in-memory key-value cache server
//!
//! Short string keys and values are spread over independently locked
//! shards and served over a small HTTP API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::ShardedCache;
pub use config::Config;
pub use tasks::spawn_stats_reporter;

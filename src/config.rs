//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{
    DEFAULT_MAX_KEY_VALUE_SIZE, DEFAULT_SHARD_CAPACITY, DEFAULT_SHARD_COUNT, MAX_SHARD_COUNT,
};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Requested shard count, rounded up to a power of two by the cache
    pub shard_count: usize,
    /// Maximum number of occupants per shard
    pub shard_capacity: usize,
    /// Maximum key and value length in bytes accepted by `/put`
    pub max_key_value_size: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
    /// Interval in seconds between statistics reports, 0 disables reporting
    pub stats_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SHARD_COUNT` - Requested shard count (default: 4, at most 65536)
    /// - `SHARD_CAPACITY` - Occupants per shard (default: 700000)
    /// - `MAX_KEY_VALUE_SIZE` - Key/value byte limit (default: 256)
    /// - `SERVER_PORT` - HTTP server port (default: 7171)
    /// - `REQUEST_TIMEOUT` - Request timeout in seconds (default: 5)
    /// - `STATS_INTERVAL` - Stats report frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// Missing or unparsable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            shard_count: parse_or(&lookup, "SHARD_COUNT", defaults.shard_count)
                .min(MAX_SHARD_COUNT),
            shard_capacity: parse_or(&lookup, "SHARD_CAPACITY", defaults.shard_capacity),
            max_key_value_size: parse_or(
                &lookup,
                "MAX_KEY_VALUE_SIZE",
                defaults.max_key_value_size,
            ),
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port),
            request_timeout: parse_or(&lookup, "REQUEST_TIMEOUT", defaults.request_timeout),
            stats_interval: parse_or(&lookup, "STATS_INTERVAL", defaults.stats_interval),
        }
    }

    /// Request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shard_count: DEFAULT_SHARD_COUNT,
            shard_capacity: DEFAULT_SHARD_CAPACITY,
            max_key_value_size: DEFAULT_MAX_KEY_VALUE_SIZE,
            server_port: 7171,
            request_timeout: 5,
            stats_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.shard_count, 4);
        assert_eq!(config.shard_capacity, 700_000);
        assert_eq!(config.max_key_value_size, 256);
        assert_eq!(config.server_port, 7171);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.stats_interval, 60);
    }

    #[test]
    fn test_config_empty_lookup_uses_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SHARD_COUNT", "16"),
            ("SHARD_CAPACITY", "1000"),
            ("SERVER_PORT", " 8080 "),
            ("STATS_INTERVAL", "0"),
        ]));
        assert_eq!(config.shard_count, 16);
        assert_eq!(config.shard_capacity, 1000);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.stats_interval, 0);
        assert_eq!(config.max_key_value_size, 256);
    }

    #[test]
    fn test_config_clamps_shard_count() {
        let config = Config::from_lookup(lookup_from(&[(
            "SHARD_COUNT",
            "18446744073709551615",
        )]));
        assert_eq!(config.shard_count, MAX_SHARD_COUNT);
    }

    #[test]
    fn test_config_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("SHARD_COUNT", "many"),
            ("SERVER_PORT", "99999"),
            ("REQUEST_TIMEOUT", "-3"),
        ]));
        assert_eq!(config.shard_count, 4);
        assert_eq!(config.server_port, 7171);
        assert_eq!(config.request_timeout, 5);
    }
}

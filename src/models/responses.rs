//! Response DTOs for the cache server API
//!
//! Field order is part of the wire format: clients compare some of these
//! bodies byte for byte.

use serde::Serialize;

/// Status string for successful operations
pub const STATUS_OK: &str = "OK";
/// Status string for a lookup that found nothing
pub const STATUS_ERROR: &str = "ERROR";

/// `{"status":..,"message":..}` body used by POST /put and by GET /get misses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl MessageResponse {
    /// Body returned after a successful insert or update
    pub fn put_success() -> Self {
        Self {
            status: STATUS_OK,
            message: "Key inserted/updated successfully.",
        }
    }

    /// Body returned when GET /get finds no value
    pub fn key_not_found() -> Self {
        Self {
            status: STATUS_ERROR,
            message: "Key not found.",
        }
    }
}

/// Response body for a GET /get hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetResponse {
    /// Always "OK"
    pub status: &'static str,
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            status: STATUS_OK,
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "healthy" }
    }
}

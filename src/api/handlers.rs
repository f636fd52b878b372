//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::cache::{ShardedCache, DEFAULT_MAX_KEY_VALUE_SIZE};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{GetParams, GetResponse, HealthResponse, MessageResponse, PutRequest};

/// Application state shared across all handlers.
///
/// Holds the process-wide cache and the boundary size limit. Cloning is
/// cheap; every clone points at the same cache.
#[derive(Clone)]
pub struct AppState {
    /// Sharded cache, internally synchronized per shard
    pub cache: Arc<ShardedCache>,
    /// Byte limit applied to keys and values on `/put`
    pub max_key_value_size: usize,
}

impl AppState {
    /// Creates a new AppState with the given cache and the default size limit.
    pub fn new(cache: ShardedCache) -> Self {
        Self {
            cache: Arc::new(cache),
            max_key_value_size: DEFAULT_MAX_KEY_VALUE_SIZE,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = ShardedCache::new(config.shard_count, config.shard_capacity);
        Self {
            cache: Arc::new(cache),
            max_key_value_size: config.max_key_value_size,
        }
    }
}

/// Handler for POST /put
///
/// Reads the body as raw bytes so that any unparsable body, whatever its
/// content type, is answered with 400.
pub async fn put_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>> {
    let req = PutRequest::from_slice(&body)?;
    req.validate(state.max_key_value_size)?;

    state.cache.put(req.key, req.value);

    Ok(Json(MessageResponse::put_success()))
}

/// Handler for GET /get?key=...
///
/// A miss is still a 200; the body carries `"status":"ERROR"`.
pub async fn get_handler(
    State(state): State<AppState>,
    Query(params): Query<GetParams>,
) -> Result<Response> {
    let key = params.into_key()?;

    let response = match state.cache.get(&key) {
        Some(value) => Json(GetResponse::new(key, value)).into_response(),
        None => Json(MessageResponse::key_not_found()).into_response(),
    };
    Ok(response)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for every unmatched method and path.
pub async fn not_found_handler() -> ApiError {
    ApiError::RouteNotFound
}

//! Error types for the cache server
//!
//! Request errors raised at the HTTP boundary. The cache core itself never fails.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// == Api Error Enum ==
/// Errors surfaced to HTTP clients.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Request body is not valid JSON for the endpoint
    #[error("Bad request: {0}")]
    MalformedInput(String),

    /// A required key was empty or absent
    #[error("{0} parameter is required")]
    MissingRequiredField(&'static str),

    /// Key or value exceeds the configured byte limit
    #[error("Bad request: {field} exceeds maximum size of {limit} bytes")]
    OversizeInput { field: &'static str, limit: usize },

    /// No endpoint matches the method and path
    #[error("Unsupported request")]
    RouteNotFound,
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput(_)
            | ApiError::MissingRequiredField(_)
            | ApiError::OversizeInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Plain-text body, matching the error shape clients already parse.
        (self.status_code(), self.to_string()).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming request bodies and query strings.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::{ApiError, Result};

/// Request body for POST /put
///
/// Field names match case-insensitively and a repeated field keeps its
/// last value. Absent or `null` fields leave an empty string, so `{}`
/// fails validation rather than parsing. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

impl<'de> Deserialize<'de> for PutRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PutRequestVisitor)
    }
}

struct PutRequestVisitor;

impl<'de> Visitor<'de> for PutRequestVisitor {
    type Value = PutRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object with \"key\" and \"value\" strings")
    }

    // A bare `null` body decodes to an empty request.
    fn visit_unit<E>(self) -> std::result::Result<PutRequest, E>
    where
        E: de::Error,
    {
        Ok(PutRequest::default())
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<PutRequest, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut req = PutRequest::default();
        while let Some(name) = map.next_key::<String>()? {
            let slot = if name.eq_ignore_ascii_case("key") {
                &mut req.key
            } else if name.eq_ignore_ascii_case("value") {
                &mut req.value
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            if let Some(v) = map.next_value::<Option<String>>()? {
                *slot = v;
            }
        }
        Ok(req)
    }
}

impl PutRequest {
    /// Parses a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedInput(e.to_string()))
    }

    /// Validates the request against the byte limit for keys and values.
    pub fn validate(&self, max_size: usize) -> Result<()> {
        if self.key.is_empty() {
            return Err(ApiError::MissingRequiredField("Key"));
        }
        if self.key.len() > max_size {
            return Err(ApiError::OversizeInput {
                field: "Key",
                limit: max_size,
            });
        }
        if self.value.len() > max_size {
            return Err(ApiError::OversizeInput {
                field: "Value",
                limit: max_size,
            });
        }
        Ok(())
    }
}

/// Query string for GET /get
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetParams {
    pub key: Option<String>,
}

impl GetParams {
    /// Returns the requested key, rejecting a missing or empty one.
    pub fn into_key(self) -> Result<String> {
        match self.key {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ApiError::MissingRequiredField("Key")),
        }
    }
}

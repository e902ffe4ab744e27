//! Pagination envelope wrapped around list responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Paginated list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Envelope {
    /// Number of rows in the whole collection
    #[schema(example = 3)]
    pub total_count: i64,
    /// Absolute URL of the next page, null on the last page
    #[schema(example = "http://localhost:8080/species?skip=1&limit=1")]
    pub next_url: Option<String>,
    /// The list returned by the route handler
    #[schema(value_type = Object)]
    pub data: Value,
}

impl Envelope {
    pub const KEYS: [&'static str; 3] = ["total_count", "next_url", "data"];

    /// Whether `body` already has the envelope shape.
    pub fn is_envelope(body: &Value) -> bool {
        match body.as_object() {
            Some(map) => map.len() == Self::KEYS.len() && Self::KEYS.iter().all(|k| map.contains_key(*k)),
            None => false,
        }
    }
}

//! Generic API response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body for lookups and malformed identifiers
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DetailResponse {
    #[schema(example = "Unable to find item with ID 999")]
    pub detail: String,
}

/// Error body for rejected query parameters
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DetailsResponse {
    #[schema(example = "Unexpected query parameters: {'where'}")]
    pub details: String,
}

/// Error body for pagination bound violations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReasonResponse {
    #[schema(example = "limit of 101 outside of bounds 0 - 100")]
    pub reason: String,
}

/// Links to the top-level collections
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    #[schema(example = "http://localhost:8080/sites")]
    pub sites: String,
    #[schema(example = "http://localhost:8080/species")]
    pub species: String,
    #[schema(example = "http://localhost:8080/surveys")]
    pub surveys: String,
}

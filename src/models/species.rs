//! Species rows and the per-site species aggregate.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of `fish_species`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Species {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "salmon")]
    pub species_name: String,
    #[schema(example = "Salmo salar")]
    pub latin_name: Option<String>,
}

/// Survey totals for one species at one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct SpeciesBySite {
    pub species_name: String,
    /// Most recent survey year for the species at the site
    pub newest_year_recorded: Option<i32>,
    /// Earliest survey year for the species at the site
    pub oldest_year_recorded: Option<i32>,
    /// Sum of the numeric fish counts; null when no survey recorded a count
    pub total_count: Option<i64>,
}

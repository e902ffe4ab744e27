//! Site rows and the per-species site projection.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of `fish_sites`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Site {
    #[schema(example = "01e8c83d-be5a-4e24-9039-4f4334e80a1c")]
    pub id: String,
    #[schema(example = "East Hampshire")]
    pub top_tier_site: Option<String>,
    #[schema(example = "Hamble")]
    pub site_parent_name: Option<String>,
    #[schema(example = "Frog Mill")]
    pub site_name: Option<String>,
    #[schema(example = "GB107042016250")]
    pub geo_water_body: Option<String>,
}

/// A site where a given species has been surveyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct SiteBySpecies {
    pub id: String,
    pub top_tier_site: Option<String>,
    pub site_parent_name: Option<String>,
    pub site_name: Option<String>,
}

impl From<&Site> for SiteBySpecies {
    fn from(site: &Site) -> Self {
        Self {
            id: site.id.clone(),
            top_tier_site: site.top_tier_site.clone(),
            site_parent_name: site.site_parent_name.clone(),
            site_name: site.site_name.clone(),
        }
    }
}

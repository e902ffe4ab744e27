//! Fish survey service: lookups, lists and the species/site associations.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::constants::ERR_ITEM_NOT_FOUND;
use crate::errors::ApiError;
use crate::models::{EntityId, Record, Resource, SiteBySpecies, SpeciesBySite};
use crate::repositories::FishRepository;
use crate::validators::validate_and_resolve;

pub struct FishService {
    repository: Arc<dyn FishRepository>,
}

impl FishService {
    pub fn new(repository: Arc<dyn FishRepository>) -> Self {
        Self { repository }
    }

    pub async fn count(&self, resource: Resource) -> Result<i64, ApiError> {
        self.repository.count(resource).await
    }

    pub async fn list(&self, resource: Resource, skip: i64, limit: i64) -> Result<Vec<Record>, ApiError> {
        debug!("Listing {} skip={} limit={}", resource.segment(), skip, limit);
        self.repository.list(resource, skip, limit).await
    }

    pub async fn get_by_id(&self, id: &EntityId) -> Result<Record, ApiError> {
        self.repository.get_by_id(id).await?.ok_or_else(|| {
            warn!("{} not found with id: {}", id.resource().segment(), id);
            ApiError::NotFound(format!("{} {}", ERR_ITEM_NOT_FOUND, id))
        })
    }

    /// Page through the sites a species was surveyed at.
    ///
    /// Out-of-bounds pagination and an empty page are both 404 on this route.
    pub async fn sites_for_species(
        &self,
        species_id: i32,
        params: &HashMap<String, String>,
    ) -> Result<Vec<SiteBySpecies>, ApiError> {
        let total = self.repository.count_sites_for_species(species_id).await?;
        let keys = validate_and_resolve(params, total)
            .map_err(|e| ApiError::NotFound(e.to_string()))?;

        let sites = self
            .repository
            .sites_for_species(species_id, keys.skip, keys.limit)
            .await?;
        if sites.is_empty() {
            warn!("No sites found for species: {}", species_id);
            return Err(ApiError::NotFound(format!(
                "unable to find sites for species with id of {}",
                species_id
            )));
        }

        info!("Found {} sites for species {}", sites.len(), species_id);
        Ok(sites)
    }

    /// Page through per-species totals recorded at a site. Same 404 policy as
    /// [`FishService::sites_for_species`].
    pub async fn species_for_site(
        &self,
        site_id: &str,
        params: &HashMap<String, String>,
    ) -> Result<Vec<SpeciesBySite>, ApiError> {
        let total = self.repository.count_species_for_site(site_id).await?;
        let keys = validate_and_resolve(params, total)
            .map_err(|e| ApiError::NotFound(e.to_string()))?;

        let species = self
            .repository
            .species_for_site(site_id, keys.skip, keys.limit)
            .await?;
        if species.is_empty() {
            warn!("No species found for site: {}", site_id);
            return Err(ApiError::NotFound(format!(
                "unable to find species for site with id of {}",
                site_id
            )));
        }

        info!("Found {} species for site {}", species.len(), site_id);
        Ok(species)
    }
}

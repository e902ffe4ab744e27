//! Repository layer for database operations.
//!
//! Handlers and middleware reach the store only through [`FishRepository`], so the
//! PostgreSQL pool can be swapped for the in-memory store in tests.

#[cfg(test)]
pub mod memory_repository;
pub mod pg_repository;

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{EntityId, Record, Resource, SiteBySpecies, SpeciesBySite};

#[cfg(test)]
pub use memory_repository::MemoryFishRepository;
pub use pg_repository::PgFishRepository;

/// Read-only access to the fish survey tables.
#[async_trait]
pub trait FishRepository: Send + Sync {
    /// Rows of `resource` in natural order, `skip` rows in, at most `limit` rows.
    async fn list(&self, resource: Resource, skip: i64, limit: i64) -> Result<Vec<Record>, ApiError>;

    /// Number of rows of `resource`.
    async fn count(&self, resource: Resource) -> Result<i64, ApiError>;

    async fn get_by_id(&self, id: &EntityId) -> Result<Option<Record>, ApiError>;

    /// Number of distinct sites where the species was surveyed.
    async fn count_sites_for_species(&self, species_id: i32) -> Result<i64, ApiError>;

    async fn sites_for_species(
        &self,
        species_id: i32,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<SiteBySpecies>, ApiError>;

    /// Number of distinct species surveyed at the site.
    async fn count_species_for_site(&self, site_id: &str) -> Result<i64, ApiError>;

    async fn species_for_site(
        &self,
        site_id: &str,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<SpeciesBySite>, ApiError>;
}

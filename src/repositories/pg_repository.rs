//! PostgreSQL repository backed by an sqlx connection pool.

use async_trait::async_trait;
use log::debug;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Config;
use crate::constants::{TABLE_SITES, TABLE_SPECIES, TABLE_SURVEYS};
use crate::errors::ApiError;
use crate::models::{
    EntityId, Record, Resource, Site, SiteBySpecies, Species, SpeciesBySite, Survey,
};

use super::FishRepository;

const SPECIES_COLUMNS: &str = "id, species_name, latin_name";
const SITE_COLUMNS: &str = "id, top_tier_site, site_parent_name, site_name, geo_water_body";
const SURVEY_COLUMNS: &str = "id, survey_id, event_date, event_date_year, \
     survey_ranked_easting, survey_ranked_northing, species_id, area_id, fish_count";

/// Repository over the `fish_species`, `fish_sites` and `fish_survey` tables.
#[derive(Clone)]
pub struct PgFishRepository {
    pool: PgPool,
}

impl PgFishRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool from configuration and check it with a ping.
    pub async fn connect(config: &Config) -> Result<Self, ApiError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect_with(config.pg_connect_options())
            .await?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        Ok(Self::new(pool))
    }

    fn columns(resource: Resource) -> &'static str {
        match resource {
            Resource::Species => SPECIES_COLUMNS,
            Resource::Sites => SITE_COLUMNS,
            Resource::Surveys => SURVEY_COLUMNS,
        }
    }
}

#[async_trait]
impl FishRepository for PgFishRepository {
    async fn list(&self, resource: Resource, skip: i64, limit: i64) -> Result<Vec<Record>, ApiError> {
        debug!("Repository: Listing {} skip={} limit={}", resource.table(), skip, limit);
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id OFFSET $1 LIMIT $2",
            Self::columns(resource),
            resource.table()
        );

        let records = match resource {
            Resource::Species => sqlx::query_as::<_, Species>(&sql)
                .bind(skip)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
                .into_iter()
                .map(Record::Species)
                .collect(),
            Resource::Sites => sqlx::query_as::<_, Site>(&sql)
                .bind(skip)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
                .into_iter()
                .map(Record::Site)
                .collect(),
            Resource::Surveys => sqlx::query_as::<_, Survey>(&sql)
                .bind(skip)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
                .into_iter()
                .map(Record::Survey)
                .collect(),
        };
        Ok(records)
    }

    async fn count(&self, resource: Resource) -> Result<i64, ApiError> {
        let sql = format!("SELECT COUNT(*) FROM {}", resource.table());
        Ok(sqlx::query_scalar::<_, i64>(&sql)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn get_by_id(&self, id: &EntityId) -> Result<Option<Record>, ApiError> {
        debug!("Repository: Finding {} by ID: {}", id.resource().table(), id);
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            Self::columns(id.resource()),
            id.resource().table()
        );

        let record = match id {
            EntityId::Species(key) => sqlx::query_as::<_, Species>(&sql)
                .bind(key)
                .fetch_optional(&self.pool)
                .await?
                .map(Record::Species),
            EntityId::Site(key) => sqlx::query_as::<_, Site>(&sql)
                .bind(key)
                .fetch_optional(&self.pool)
                .await?
                .map(Record::Site),
            EntityId::Survey(key) => sqlx::query_as::<_, Survey>(&sql)
                .bind(key)
                .fetch_optional(&self.pool)
                .await?
                .map(Record::Survey),
        };
        Ok(record)
    }

    async fn count_sites_for_species(&self, species_id: i32) -> Result<i64, ApiError> {
        let sql = format!(
            "SELECT COUNT(DISTINCT s.id) FROM {sites} s \
             JOIN {surveys} v ON s.id = v.area_id \
             WHERE v.species_id = $1",
            sites = TABLE_SITES,
            surveys = TABLE_SURVEYS
        );
        Ok(sqlx::query_scalar::<_, i64>(&sql)
            .bind(species_id)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn sites_for_species(
        &self,
        species_id: i32,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<SiteBySpecies>, ApiError> {
        debug!("Repository: Finding sites for species: {}", species_id);
        let sql = format!(
            "SELECT s.id, s.top_tier_site, s.site_parent_name, s.site_name \
             FROM {sites} s \
             JOIN {surveys} v ON s.id = v.area_id \
             WHERE v.species_id = $1 \
             GROUP BY s.id, s.top_tier_site, s.site_parent_name, s.site_name \
             ORDER BY s.id OFFSET $2 LIMIT $3",
            sites = TABLE_SITES,
            surveys = TABLE_SURVEYS
        );
        Ok(sqlx::query_as::<_, SiteBySpecies>(&sql)
            .bind(species_id)
            .bind(skip)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn count_species_for_site(&self, site_id: &str) -> Result<i64, ApiError> {
        let sql = format!(
            "SELECT COUNT(DISTINCT sp.species_name) FROM {species} sp \
             JOIN {surveys} v ON v.species_id = sp.id \
             WHERE v.area_id = $1",
            species = TABLE_SPECIES,
            surveys = TABLE_SURVEYS
        );
        Ok(sqlx::query_scalar::<_, i64>(&sql)
            .bind(site_id)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn species_for_site(
        &self,
        site_id: &str,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<SpeciesBySite>, ApiError> {
        debug!("Repository: Finding species for site: {}", site_id);
        let sql = format!(
            "SELECT sp.species_name, \
                    MAX(v.event_date_year) AS newest_year_recorded, \
                    MIN(v.event_date_year) AS oldest_year_recorded, \
                    SUM(CAST(NULLIF(v.fish_count, '') AS INTEGER)) AS total_count \
             FROM {species} sp \
             JOIN {surveys} v ON v.species_id = sp.id \
             WHERE v.area_id = $1 \
             GROUP BY sp.species_name \
             ORDER BY total_count DESC NULLS LAST \
             OFFSET $2 LIMIT $3",
            species = TABLE_SPECIES,
            surveys = TABLE_SURVEYS
        );
        Ok(sqlx::query_as::<_, SpeciesBySite>(&sql)
            .bind(site_id)
            .bind(skip)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?)
    }
}

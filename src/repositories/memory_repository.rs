//! In-memory repository. Rows are served in insertion order.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use log::debug;

use crate::errors::ApiError;
use crate::models::{
    EntityId, Record, Resource, Site, SiteBySpecies, Species, SpeciesBySite, Survey,
};

use super::FishRepository;

#[derive(Debug, Default)]
pub struct MemoryFishRepository {
    species: Vec<Species>,
    sites: Vec<Site>,
    surveys: Vec<Survey>,
    list_calls: AtomicUsize,
}

fn page<T: Clone>(rows: &[T], skip: i64, limit: i64) -> Vec<T> {
    rows.iter()
        .skip(usize::try_from(skip).unwrap_or(0))
        .take(usize::try_from(limit).unwrap_or(0))
        .cloned()
        .collect()
}

impl MemoryFishRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_species(mut self, species: Vec<Species>) -> Self {
        self.species = species;
        self
    }

    pub fn with_sites(mut self, sites: Vec<Site>) -> Self {
        self.sites = sites;
        self
    }

    pub fn with_surveys(mut self, surveys: Vec<Survey>) -> Self {
        self.surveys = surveys;
        self
    }

    /// Number of page queries served so far, entity lists and association lists alike.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn record_list_call(&self) {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
    }

    /// Distinct sites surveyed for the species, ordered by site id.
    fn associated_sites(&self, species_id: i32) -> Vec<SiteBySpecies> {
        let site_ids: BTreeSet<&str> = self
            .surveys
            .iter()
            .filter(|survey| survey.species_id == Some(species_id))
            .filter_map(|survey| survey.area_id.as_deref())
            .collect();

        site_ids
            .into_iter()
            .filter_map(|id| self.sites.iter().find(|site| site.id == id))
            .map(SiteBySpecies::from)
            .collect()
    }

    /// Per-species aggregates for the site, largest total first, unknown totals last.
    fn associated_species(&self, site_id: &str) -> Vec<SpeciesBySite> {
        let mut aggregates: Vec<SpeciesBySite> = Vec::new();

        for survey in self
            .surveys
            .iter()
            .filter(|survey| survey.area_id.as_deref() == Some(site_id))
        {
            let Some(species) = self
                .species
                .iter()
                .find(|species| Some(species.id) == survey.species_id)
            else {
                continue;
            };

            let index = match aggregates
                .iter()
                .position(|agg| agg.species_name == species.species_name)
            {
                Some(index) => index,
                None => {
                    aggregates.push(SpeciesBySite {
                        species_name: species.species_name.clone(),
                        newest_year_recorded: None,
                        oldest_year_recorded: None,
                        total_count: None,
                    });
                    aggregates.len() - 1
                }
            };

            let agg = &mut aggregates[index];
            if let Some(year) = survey.event_date_year {
                agg.newest_year_recorded = Some(agg.newest_year_recorded.map_or(year, |y| y.max(year)));
                agg.oldest_year_recorded = Some(agg.oldest_year_recorded.map_or(year, |y| y.min(year)));
            }
            if let Some(count) = survey.parsed_fish_count() {
                agg.total_count = Some(agg.total_count.unwrap_or(0) + count);
            }
        }

        aggregates.sort_by(|a, b| match (a.total_count, b.total_count) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        aggregates
    }
}

#[async_trait]
impl FishRepository for MemoryFishRepository {
    async fn list(&self, resource: Resource, skip: i64, limit: i64) -> Result<Vec<Record>, ApiError> {
        debug!("Memory repository: Listing {} skip={} limit={}", resource.table(), skip, limit);
        self.record_list_call();
        let records = match resource {
            Resource::Species => page(&self.species, skip, limit)
                .into_iter()
                .map(Record::Species)
                .collect(),
            Resource::Sites => page(&self.sites, skip, limit)
                .into_iter()
                .map(Record::Site)
                .collect(),
            Resource::Surveys => page(&self.surveys, skip, limit)
                .into_iter()
                .map(Record::Survey)
                .collect(),
        };
        Ok(records)
    }

    async fn count(&self, resource: Resource) -> Result<i64, ApiError> {
        let count = match resource {
            Resource::Species => self.species.len(),
            Resource::Sites => self.sites.len(),
            Resource::Surveys => self.surveys.len(),
        };
        Ok(count as i64)
    }

    async fn get_by_id(&self, id: &EntityId) -> Result<Option<Record>, ApiError> {
        let record = match id {
            EntityId::Species(key) => self
                .species
                .iter()
                .find(|row| row.id == *key)
                .cloned()
                .map(Record::Species),
            EntityId::Site(key) => self
                .sites
                .iter()
                .find(|row| row.id == *key)
                .cloned()
                .map(Record::Site),
            EntityId::Survey(key) => self
                .surveys
                .iter()
                .find(|row| row.id == *key)
                .cloned()
                .map(Record::Survey),
        };
        Ok(record)
    }

    async fn count_sites_for_species(&self, species_id: i32) -> Result<i64, ApiError> {
        Ok(self.associated_sites(species_id).len() as i64)
    }

    async fn sites_for_species(
        &self,
        species_id: i32,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<SiteBySpecies>, ApiError> {
        self.record_list_call();
        Ok(page(&self.associated_sites(species_id), skip, limit))
    }

    async fn count_species_for_site(&self, site_id: &str) -> Result<i64, ApiError> {
        Ok(self.associated_species(site_id).len() as i64)
    }

    async fn species_for_site(
        &self,
        site_id: &str,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<SpeciesBySite>, ApiError> {
        self.record_list_call();
        Ok(page(&self.associated_species(site_id), skip, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn species(id: i32, name: &str) -> Species {
        Species {
            id,
            species_name: name.to_string(),
            latin_name: None,
        }
    }

    fn site(id: &str) -> Site {
        Site {
            id: id.to_string(),
            top_tier_site: Some("East Hampshire".to_string()),
            site_parent_name: Some("Hamble".to_string()),
            site_name: Some("Frog Mill".to_string()),
            geo_water_body: None,
        }
    }

    fn survey(species_id: i32, area_id: &str, year: i32, fish_count: &str) -> Survey {
        Survey {
            id: Uuid::new_v4(),
            survey_id: 1,
            event_date: None,
            event_date_year: Some(year),
            survey_ranked_easting: None,
            survey_ranked_northing: None,
            species_id: Some(species_id),
            area_id: Some(area_id.to_string()),
            fish_count: Some(fish_count.to_string()),
        }
    }

    fn repository() -> MemoryFishRepository {
        MemoryFishRepository::new()
            .with_species(vec![species(1, "salmon"), species(2, "gold fish"), species(3, "eel")])
            .with_sites(vec![site("site-b"), site("site-a")])
            .with_surveys(vec![
                survey(1, "site-a", 2010, "5"),
                survey(1, "site-a", 2017, "3"),
                survey(2, "site-a", 2012, "20"),
                survey(3, "site-a", 2012, ""),
                survey(1, "site-b", 2011, "1"),
            ])
    }

    #[actix_web::test]
    async fn test_list_pages_in_insertion_order() {
        let repo = repository();
        let rows = repo.list(Resource::Species, 1, 1).await.unwrap();
        assert_eq!(rows, vec![Record::Species(species(2, "gold fish"))]);
        assert!(repo.list(Resource::Species, 3, 10).await.unwrap().is_empty());
        assert_eq!(repo.list_calls(), 2);
    }

    #[actix_web::test]
    async fn test_get_by_id() {
        let repo = repository();
        assert!(repo.get_by_id(&EntityId::Species(3)).await.unwrap().is_some());
        assert!(repo.get_by_id(&EntityId::Species(999)).await.unwrap().is_none());
        assert!(repo
            .get_by_id(&EntityId::Site("site-a".to_string()))
            .await
            .unwrap()
            .is_some());
    }

    #[actix_web::test]
    async fn test_sites_for_species_are_distinct() {
        let repo = repository();
        assert_eq!(repo.count_sites_for_species(1).await.unwrap(), 2);
        let sites = repo.sites_for_species(1, 0, 10).await.unwrap();
        let ids: Vec<&str> = sites.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["site-a", "site-b"]);
        assert_eq!(repo.count_sites_for_species(42).await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_species_for_site_aggregates() {
        let repo = repository();
        let species = repo.species_for_site("site-a", 0, 10).await.unwrap();
        assert_eq!(
            species,
            vec![
                SpeciesBySite {
                    species_name: "gold fish".to_string(),
                    newest_year_recorded: Some(2012),
                    oldest_year_recorded: Some(2012),
                    total_count: Some(20),
                },
                SpeciesBySite {
                    species_name: "salmon".to_string(),
                    newest_year_recorded: Some(2017),
                    oldest_year_recorded: Some(2010),
                    total_count: Some(8),
                },
                SpeciesBySite {
                    species_name: "eel".to_string(),
                    newest_year_recorded: Some(2012),
                    oldest_year_recorded: Some(2012),
                    total_count: None,
                },
            ]
        );
        assert_eq!(repo.count_species_for_site("site-a").await.unwrap(), 3);
    }
}

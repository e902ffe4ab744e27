//! Species handlers.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::errors::ApiError;
use crate::models::{parse_species_id, Resource};
use crate::services::FishService;
use crate::validators::query_map;

use super::common::{get_one, list_page};

/// List species
#[utoipa::path(
    get,
    path = "/species",
    tag = "Species",
    params(
        ("limit" = Option<i64>, Query, description = "Page size (default: 10, max: 100)"),
        ("skip" = Option<i64>, Query, description = "Rows to skip (default: 0, max: total count)")
    ),
    responses(
        (status = 200, description = "Page of species", body = crate::models::Envelope),
        (status = 400, description = "Bad query parameters or pagination", body = crate::models::ReasonResponse)
    )
)]
pub async fn get_all_species(
    fish_service: web::Data<FishService>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    list_page(&fish_service, &req, Resource::Species).await
}

/// Get a species by ID
#[utoipa::path(
    get,
    path = "/species/{id}",
    tag = "Species",
    params(
        ("id" = i32, Path, description = "Species ID")
    ),
    responses(
        (status = 200, description = "Species found", body = crate::models::Species),
        (status = 404, description = "Species not found", body = crate::models::DetailResponse),
        (status = 422, description = "ID is not an integer", body = crate::models::DetailResponse)
    )
)]
pub async fn get_species(
    fish_service: web::Data<FishService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    get_one(&fish_service, Resource::Species, &path.into_inner()).await
}

/// List the sites a species was surveyed at
#[utoipa::path(
    get,
    path = "/species/{id}/sites",
    tag = "Species",
    params(
        ("id" = i32, Path, description = "Species ID"),
        ("limit" = Option<i64>, Query, description = "Page size (default: 10, max: 100)"),
        ("skip" = Option<i64>, Query, description = "Rows to skip (default: 0, max: number of sites)")
    ),
    responses(
        (status = 200, description = "Sites for the species", body = [crate::models::SiteBySpecies]),
        (status = 404, description = "No sites, or pagination out of bounds", body = crate::models::DetailResponse),
        (status = 422, description = "ID is not an integer", body = crate::models::DetailResponse)
    )
)]
pub async fn get_sites_for_species(
    fish_service: web::Data<FishService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let species_id = parse_species_id(&path.into_inner())?;
    let params = query_map(req.query_string());
    let sites = fish_service.sites_for_species(species_id, &params).await?;
    Ok(HttpResponse::Ok().json(sites))
}

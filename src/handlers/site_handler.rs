//! Site handlers.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::errors::ApiError;
use crate::models::Resource;
use crate::services::FishService;
use crate::validators::query_map;

use super::common::{get_one, list_page};

/// List sites
#[utoipa::path(
    get,
    path = "/sites",
    tag = "Sites",
    params(
        ("limit" = Option<i64>, Query, description = "Page size (default: 10, max: 100)"),
        ("skip" = Option<i64>, Query, description = "Rows to skip (default: 0, max: total count)")
    ),
    responses(
        (status = 200, description = "Page of sites", body = crate::models::Envelope),
        (status = 400, description = "Bad query parameters or pagination", body = crate::models::ReasonResponse)
    )
)]
pub async fn get_all_sites(
    fish_service: web::Data<FishService>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    list_page(&fish_service, &req, Resource::Sites).await
}

/// Get a site by ID
#[utoipa::path(
    get,
    path = "/sites/{id}",
    tag = "Sites",
    params(
        ("id" = String, Path, description = "Site ID")
    ),
    responses(
        (status = 200, description = "Site found", body = crate::models::Site),
        (status = 404, description = "Site not found", body = crate::models::DetailResponse)
    )
)]
pub async fn get_site(
    fish_service: web::Data<FishService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    get_one(&fish_service, Resource::Sites, &path.into_inner()).await
}

/// Per-species survey totals at a site
#[utoipa::path(
    get,
    path = "/sites/{id}/species",
    tag = "Sites",
    params(
        ("id" = String, Path, description = "Site ID"),
        ("limit" = Option<i64>, Query, description = "Page size (default: 10, max: 100)"),
        ("skip" = Option<i64>, Query, description = "Rows to skip (default: 0, max: number of species)")
    ),
    responses(
        (status = 200, description = "Species recorded at the site", body = [crate::models::SpeciesBySite]),
        (status = 404, description = "No species, or pagination out of bounds", body = crate::models::DetailResponse)
    )
)]
pub async fn get_species_for_site(
    fish_service: web::Data<FishService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let site_id = path.into_inner();
    let params = query_map(req.query_string());
    let species = fish_service.species_for_site(&site_id, &params).await?;
    Ok(HttpResponse::Ok().json(species))
}

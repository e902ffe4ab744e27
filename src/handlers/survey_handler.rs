//! Survey handlers.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::errors::ApiError;
use crate::models::Resource;
use crate::services::FishService;

use super::common::{get_one, list_page};

/// List surveys
#[utoipa::path(
    get,
    path = "/surveys",
    tag = "Surveys",
    params(
        ("limit" = Option<i64>, Query, description = "Page size (default: 10, max: 100)"),
        ("skip" = Option<i64>, Query, description = "Rows to skip (default: 0, max: total count)")
    ),
    responses(
        (status = 200, description = "Page of surveys", body = crate::models::Envelope),
        (status = 400, description = "Bad query parameters or pagination", body = crate::models::ReasonResponse)
    )
)]
pub async fn get_all_surveys(
    fish_service: web::Data<FishService>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    list_page(&fish_service, &req, Resource::Surveys).await
}

/// Get a survey by ID
#[utoipa::path(
    get,
    path = "/surveys/{id}",
    tag = "Surveys",
    params(
        ("id" = String, Path, description = "Survey UUID")
    ),
    responses(
        (status = 200, description = "Survey found", body = crate::models::Survey),
        (status = 404, description = "Survey not found", body = crate::models::DetailResponse),
        (status = 422, description = "ID is not a UUID", body = crate::models::DetailResponse)
    )
)]
pub async fn get_survey(
    fish_service: web::Data<FishService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    get_one(&fish_service, Resource::Surveys, &path.into_inner()).await
}

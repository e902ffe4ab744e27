//! Root index, OpenAPI document and fallback handlers.

use actix_web::{HttpRequest, HttpResponse};
use utoipa::OpenApi;

use crate::constants::ERR_ROUTE_NOT_FOUND;
use crate::models::{DetailResponse, HomeResponse, Resource};
use crate::openapi::ApiDoc;

/// Links to every collection
#[utoipa::path(
    get,
    path = "/",
    tag = "Home",
    responses(
        (status = 200, description = "Collection URLs", body = HomeResponse)
    )
)]
pub async fn home(req: HttpRequest) -> HttpResponse {
    let info = req.connection_info();
    let url_for = |resource: Resource| {
        format!("{}://{}/{}", info.scheme(), info.host(), resource.segment())
    };

    HttpResponse::Ok().json(HomeResponse {
        sites: url_for(Resource::Sites),
        species: url_for(Resource::Species),
        surveys: url_for(Resource::Surveys),
    })
}

pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(DetailResponse {
        detail: ERR_ROUTE_NOT_FOUND.to_string(),
    })
}

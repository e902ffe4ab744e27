pub mod registry;


use actix_web::web;

use crate::handlers;

pub use registry::{resolve, RouteKind};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Collection index
        .route("/", web::get().to(handlers::home))
        .route("/openapi.json", web::get().to(handlers::openapi_json))
        // Species
        .route("/species", web::get().to(handlers::get_all_species))
        .route("/species/{id}", web::get().to(handlers::get_species))
        .route(
            "/species/{id}/sites",
            web::get().to(handlers::get_sites_for_species),
        )
        // Sites
        .route("/sites", web::get().to(handlers::get_all_sites))
        .route("/sites/{id}", web::get().to(handlers::get_site))
        .route(
            "/sites/{id}/species",
            web::get().to(handlers::get_species_for_site),
        )
        // Surveys
        .route("/surveys", web::get().to(handlers::get_all_surveys))
        .route("/surveys/{id}", web::get().to(handlers::get_survey))
        .default_service(web::to(handlers::not_found));
}

use utoipa::OpenApi;

use crate::models::{
    DetailResponse, DetailsResponse, Envelope, HomeResponse, ReasonResponse, Site,
    SiteBySpecies, Species, SpeciesBySite, Survey,
};

/// OpenAPI documentation for the Fish Survey API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fish Survey API",
        version = "0.1.0",
        description = "Read-only REST API for fish species, survey sites and surveys. List endpoints are paginated with `skip` and `limit` and wrapped as `{total_count, next_url, data}`.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Home", description = "Collection index"),
        (name = "Species", description = "Fish species and the sites they were surveyed at"),
        (name = "Sites", description = "Survey sites and the species recorded there"),
        (name = "Surveys", description = "Individual survey records")
    ),
    paths(
        crate::handlers::home,
        crate::handlers::get_all_species,
        crate::handlers::get_species,
        crate::handlers::get_sites_for_species,
        crate::handlers::get_all_sites,
        crate::handlers::get_site,
        crate::handlers::get_species_for_site,
        crate::handlers::get_all_surveys,
        crate::handlers::get_survey
    ),
    components(
        schemas(
            Species,
            Site,
            Survey,
            SiteBySpecies,
            SpeciesBySite,
            Envelope,
            HomeResponse,
            DetailResponse,
            DetailsResponse,
            ReasonResponse
        )
    )
)]
pub struct ApiDoc;

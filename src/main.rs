use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use fish_survey_api::config::CONFIG;
use fish_survey_api::middleware::{PaginationEnvelope, QueryParamGuard};
use fish_survey_api::repositories::PgFishRepository;
use fish_survey_api::routes;
use fish_survey_api::services::FishService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    info!(
        "Connecting to PostgreSQL at {}:{}/{}...",
        CONFIG.db_host, CONFIG.db_port, CONFIG.db_name
    );
    let repository = PgFishRepository::connect(&CONFIG)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    info!("Connected to PostgreSQL successfully!");

    let fish_service = web::Data::new(FishService::new(Arc::new(repository)));

    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(fish_service.clone())
            .wrap(PaginationEnvelope)
            .wrap(QueryParamGuard)
            .wrap(Logger::default())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}

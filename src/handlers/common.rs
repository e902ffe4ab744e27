//! Shared list and lookup bodies for the per-resource handlers.

use actix_web::{HttpRequest, HttpResponse};
use log::{debug, info};
use serde_json::{Map, Value};

use crate::constants::ERR_PAGINATION_MISSING;
use crate::errors::ApiError;
use crate::middleware::RequestExt;
use crate::models::{Record, Resource};
use crate::services::FishService;

/// One page of `resource` as a bare JSON list. The envelope is added by middleware.
pub async fn list_page(
    fish_service: &FishService,
    req: &HttpRequest,
    resource: Resource,
) -> Result<HttpResponse, ApiError> {
    let keys = req
        .get_pagination()
        .ok_or_else(|| ApiError::Internal(ERR_PAGINATION_MISSING.to_string()))?;

    let records = fish_service.list(resource, keys.skip, keys.limit).await?;
    info!("Fetched {} {} rows", records.len(), resource.segment());
    let rows: Vec<Map<String, Value>> = records.iter().map(Record::to_mapping).collect();
    Ok(HttpResponse::Ok().json(rows))
}

/// A single row of `resource`, no envelope.
pub async fn get_one(
    fish_service: &FishService,
    resource: Resource,
    raw_id: &str,
) -> Result<HttpResponse, ApiError> {
    debug!("Fetching {} with id: {}", resource.segment(), raw_id);
    let id = resource.parse_id(raw_id)?;
    let record = fish_service.get_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(record.to_mapping()))
}

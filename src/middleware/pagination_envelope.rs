//! Middleware validating pagination for list routes and wrapping their responses.

use actix_web::{
    body::{to_bytes, BoxBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::{Method, StatusCode},
    web, Error, HttpMessage, HttpRequest, HttpResponse, ResponseError,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use log::{debug, warn};
use serde_json::Value;
use std::rc::Rc;
use url::Url;

use crate::constants::{ERR_SERVICE_MISSING, PARAM_LIMIT, PARAM_SKIP};
use crate::errors::ApiError;
use crate::models::Envelope;
use crate::routes::{resolve, RouteKind};
use crate::services::FishService;
use crate::validators::{next_skip, query_map, validate_and_resolve, PaginationKeys};

/// Pagination envelope middleware.
///
/// For GET requests to a top-level list route it
/// 1. fetches the live row count and validates `skip`/`limit` against it, answering 400
///    before the handler runs when they are out of bounds,
/// 2. stores the validated [`PaginationKeys`] in the request extensions for the handler,
/// 3. wraps a 200 response as `{total_count, next_url, data}`.
///
/// Every other request and every non-200 response passes through unchanged.
pub struct PaginationEnvelope;

impl<S, B> Transform<S, ServiceRequest> for PaginationEnvelope
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Transform = PaginationEnvelopeService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(PaginationEnvelopeService {
            service: Rc::new(service),
        })
    }
}

pub struct PaginationEnvelopeService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for PaginationEnvelopeService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let resource = match resolve(req.path()) {
                RouteKind::List(resource) if req.method() == Method::GET => resource,
                _ => return Ok(service.call(req).await?.map_into_boxed_body()),
            };

            let fish_service = match req.app_data::<web::Data<FishService>>().cloned() {
                Some(fish_service) => fish_service,
                None => {
                    let err = ApiError::Internal(ERR_SERVICE_MISSING.to_string());
                    return Ok(req.error_response(err));
                }
            };

            let total_count = match fish_service.count(resource).await {
                Ok(total_count) => total_count,
                Err(err) => return Ok(req.error_response(err)),
            };
            let params = query_map(req.query_string());
            let keys = match validate_and_resolve(&params, total_count) {
                Ok(keys) => keys,
                Err(err) => {
                    warn!("Rejected pagination for {}: {}", req.path(), err);
                    return Ok(req.error_response(ApiError::from(err)));
                }
            };
            req.extensions_mut().insert(keys);

            let res = service.call(req).await?;
            if res.status() != StatusCode::OK {
                return Ok(res.map_into_boxed_body());
            }

            let (request, response) = res.into_parts();
            let wrapped = envelope_response(&request, response, keys, total_count)
                .await
                .unwrap_or_else(|err| err.error_response());
            Ok(ServiceResponse::new(request, wrapped))
        })
    }
}

/// Build the envelope for a successful list response.
async fn envelope_response<B: MessageBody>(
    request: &HttpRequest,
    response: HttpResponse<B>,
    keys: PaginationKeys,
    total_count: i64,
) -> Result<HttpResponse, ApiError> {
    let next_url = match next_skip(keys, total_count) {
        Some(skip) => Some(build_next_url(&request_url(request), skip, keys.limit)?),
        None => None,
    };
    debug!(
        "Wrapping {}: total_count={} next_url={:?}",
        request.path(),
        total_count,
        next_url
    );

    let status = response.status();
    let body = to_bytes(response.into_body()).await.map_err(|err| {
        let err: Box<dyn std::error::Error> = err.into();
        ApiError::Internal(format!("failed to read list response: {}", err))
    })?;

    wrap(&body, status, total_count, next_url)
}

/// Absolute URL of the request as the client addressed it.
pub fn request_url(req: &HttpRequest) -> String {
    let info = req.connection_info();
    let query = req.query_string();
    if query.is_empty() {
        format!("{}://{}{}", info.scheme(), info.host(), req.path())
    } else {
        format!("{}://{}{}?{}", info.scheme(), info.host(), req.path(), query)
    }
}

/// Replace `skip`/`limit` in `current_url`, keeping every other parameter in order.
pub fn build_next_url(current_url: &str, skip: i64, limit: i64) -> Result<String, ApiError> {
    let mut url = Url::parse(current_url)
        .map_err(|e| ApiError::Internal(format!("invalid request URL {}: {}", current_url, e)))?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(name, _)| name != PARAM_SKIP && name != PARAM_LIMIT)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(PARAM_SKIP, &skip.to_string())
        .append_pair(PARAM_LIMIT, &limit.to_string());

    Ok(url.to_string())
}

/// Re-encode a JSON list body inside the pagination envelope, keeping `status`.
///
/// A body that already is an envelope is returned as is.
pub fn wrap(
    raw_body: &[u8],
    status: StatusCode,
    total_count: i64,
    next_url: Option<String>,
) -> Result<HttpResponse, ApiError> {
    let data: Value = serde_json::from_slice(raw_body)
        .map_err(|e| ApiError::Internal(format!("list response is not JSON: {}", e)))?;

    if Envelope::is_envelope(&data) {
        return Ok(HttpResponse::build(status).json(data));
    }

    Ok(HttpResponse::build(status).json(Envelope {
        total_count,
        next_url,
        data,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_next_url_no_existing_params() {
        assert_eq!(
            build_next_url("http://127.0.0.1:8000/sites", 0, 10).unwrap(),
            "http://127.0.0.1:8000/sites?skip=0&limit=10"
        );
    }

    #[test]
    fn test_build_next_url_existing_params() {
        assert_eq!(
            build_next_url("http://127.0.0.1:8000/sites?limit=10&skip=0", 0, 10).unwrap(),
            "http://127.0.0.1:8000/sites?skip=0&limit=10"
        );
    }

    #[test]
    fn test_build_next_url_keeps_other_params() {
        assert_eq!(
            build_next_url("http://localhost/sites?skip=0&q=frog&limit=5&skip=3", 5, 5).unwrap(),
            "http://localhost/sites?q=frog&skip=5&limit=5"
        );
    }

    #[actix_web::test]
    async fn test_wrap_list_body() {
        let body = br#"[{"id": 1}]"#;
        let response = wrap(
            body,
            StatusCode::OK,
            3,
            Some("http://localhost/species?skip=1&limit=1".to_string()),
        )
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            json!({
                "total_count": 3,
                "next_url": "http://localhost/species?skip=1&limit=1",
                "data": [{"id": 1}]
            })
        );
    }

    #[actix_web::test]
    async fn test_wrap_does_not_rewrap() {
        let body = br#"{"total_count": 1, "next_url": null, "data": []}"#;
        let response = wrap(body, StatusCode::OK, 5, None).unwrap();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, json!({"total_count": 1, "next_url": null, "data": []}));
    }

    #[test]
    fn test_wrap_rejects_non_json() {
        assert!(matches!(
            wrap(b"<html>", StatusCode::OK, 1, None),
            Err(ApiError::Internal(_))
        ));
    }
}

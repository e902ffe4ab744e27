//! Middleware rejecting query parameters a route does not accept.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use log::warn;
use std::rc::Rc;

use crate::validators::{check_for_bad_params, expected_params, query_pairs};

/// Query parameter guard.
///
/// Answers 400 with every unexpected parameter name before the route handler (or any
/// data access) runs. Requests to `/` and requests without a query string pass untouched.
pub struct QueryParamGuard;

impl<S, B> Transform<S, ServiceRequest> for QueryParamGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = QueryParamGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(QueryParamGuardService {
            service: Rc::new(service),
        })
    }
}

pub struct QueryParamGuardService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for QueryParamGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if req.path() != "/" {
                let received = query_pairs(req.query_string());
                let expected = expected_params(req.path());

                if let Err(err) =
                    check_for_bad_params(received.iter().map(|(name, _)| name.as_str()), &expected)
                {
                    warn!("Rejected {}: {}", req.path(), err);
                    return Ok(req.error_response(err).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

//! Read-only REST API over fish survey records.
//!
//! Every request passes through two interceptors before reaching its handler: the
//! [`middleware::QueryParamGuard`] rejects query parameters the route does not accept and
//! the [`middleware::PaginationEnvelope`] validates `skip`/`limit` for list routes and wraps
//! their responses as `{total_count, next_url, data}`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod validators;

//! Request/response interceptors wrapped around every route.
//!
//! Registration order matters: actix runs the last `wrap` first, so
//! [`QueryParamGuard`] must be wrapped after [`PaginationEnvelope`].

pub mod pagination_envelope;
pub mod query_guard;
pub mod request_ext;

pub use pagination_envelope::PaginationEnvelope;
pub use query_guard::QueryParamGuard;
pub use request_ext::RequestExt;

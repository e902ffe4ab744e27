//! Request validation: pagination bounds and accepted query parameters.

pub mod pagination;
pub mod query_params;

pub use pagination::*;
pub use query_params::*;

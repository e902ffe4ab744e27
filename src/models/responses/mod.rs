//! Response models for API endpoints.

pub mod api;
pub mod envelope;

pub use api::*;
pub use envelope::*;

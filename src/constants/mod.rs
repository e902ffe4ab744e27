//! Application constants module.
//!
//! This module centralizes constant strings and limits used throughout the application,
//! including error messages, pagination bounds and table names.

pub mod errors;
pub mod pagination;
pub mod tables;

pub use errors::*;
pub use pagination::*;
pub use tables::*;

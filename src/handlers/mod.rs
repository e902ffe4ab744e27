//! HTTP request handlers organized by resource.

pub mod common;
pub mod home_handler;
pub mod site_handler;
pub mod species_handler;
pub mod survey_handler;

pub use home_handler::*;
pub use site_handler::*;
pub use species_handler::*;
pub use survey_handler::*;

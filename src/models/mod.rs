//! Data models organized by type.

pub mod record;
pub mod responses;
pub mod site;
pub mod species;
pub mod survey;

pub use record::*;
pub use responses::*;
pub use site::*;
pub use species::*;
pub use survey::*;

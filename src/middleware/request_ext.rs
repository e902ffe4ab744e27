//! Request extension trait for reading validated pagination from HTTP requests.

use actix_web::HttpMessage;

use crate::validators::PaginationKeys;

/// Extension trait for extracting pagination keys from HTTP requests.
///
/// The keys are inserted by the PaginationEnvelope middleware after they pass bounds
/// validation, so a handler that finds them never has to re-check them.
pub trait RequestExt {
    /// Get the validated pagination keys from the request extensions.
    ///
    /// Returns `None` when the request did not pass through the envelope stage.
    fn get_pagination(&self) -> Option<PaginationKeys>;
}

impl RequestExt for actix_web::HttpRequest {
    fn get_pagination(&self) -> Option<PaginationKeys> {
        self.extensions().get::<PaginationKeys>().copied()
    }
}

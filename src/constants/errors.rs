//! Error message constants used throughout the application.

// Query parameter errors
pub const ERR_UNEXPECTED_QUERY_PARAMS: &str = "Unexpected query parameters";

// Lookup errors
pub const ERR_ITEM_NOT_FOUND: &str = "Unable to find item with ID";
pub const ERR_ROUTE_NOT_FOUND: &str = "Not Found";

// Generic errors
pub const ERR_INTERNAL: &str = "Internal server error";
pub const ERR_PAGINATION_MISSING: &str =
    "Pagination keys missing from request; is the PaginationEnvelope middleware installed?";
pub const ERR_SERVICE_MISSING: &str = "FishService is not registered as app data";

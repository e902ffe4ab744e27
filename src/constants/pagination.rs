//! Pagination constants for list endpoints.

/// Query parameter carrying the number of rows to skip.
pub const PARAM_SKIP: &str = "skip";

/// Query parameter carrying the page size.
pub const PARAM_LIMIT: &str = "limit";

/// Default number of rows skipped when `skip` is not in the request.
pub const DEFAULT_SKIP: i64 = 0;

/// Default page size when `limit` is not in the request.
pub const DEFAULT_LIMIT: i64 = 10;

/// Maximum allowed page size.
pub const MAX_LIMIT: i64 = 100;

//! Offset/limit validation against the live row count.

use std::collections::HashMap;
use std::fmt;

use crate::constants::{DEFAULT_LIMIT, DEFAULT_SKIP, MAX_LIMIT, PARAM_LIMIT, PARAM_SKIP};

/// A validated page request. Only built by [`validate_and_resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationKeys {
    pub limit: i64,
    pub skip: i64,
}

impl Default for PaginationKeys {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            skip: DEFAULT_SKIP,
        }
    }
}

/// One reason per offending parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationError {
    pub reasons: Vec<String>,
}

impl fmt::Display for PaginationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reasons.join("; "))
    }
}

impl std::error::Error for PaginationError {}

/// Check `raw` parses into `0..=upper_bound`.
fn check_bounds(field: &str, raw: &str, upper_bound: i64) -> Result<i64, String> {
    match raw.parse::<i64>() {
        Ok(value) if (0..=upper_bound).contains(&value) => Ok(value),
        _ => Err(format!(
            "{} of {} outside of bounds 0 - {}",
            field, raw, upper_bound
        )),
    }
}

/// Resolve `skip` and `limit` from the received query parameters.
///
/// Missing parameters take their defaults independently. `skip` must lie in
/// `0..=total_count` and `limit` in `0..=MAX_LIMIT`; both are checked before failing so
/// the error names every offending field.
pub fn validate_and_resolve(
    params: &HashMap<String, String>,
    total_count: i64,
) -> Result<PaginationKeys, PaginationError> {
    let default_skip = DEFAULT_SKIP.to_string();
    let default_limit = DEFAULT_LIMIT.to_string();
    let raw_skip = params.get(PARAM_SKIP).unwrap_or(&default_skip);
    let raw_limit = params.get(PARAM_LIMIT).unwrap_or(&default_limit);

    let skip = check_bounds(PARAM_SKIP, raw_skip, total_count);
    let limit = check_bounds(PARAM_LIMIT, raw_limit, MAX_LIMIT);

    match (skip, limit) {
        (Ok(skip), Ok(limit)) => Ok(PaginationKeys { limit, skip }),
        (skip, limit) => Err(PaginationError {
            reasons: [skip.err(), limit.err()].into_iter().flatten().collect(),
        }),
    }
}

/// The `skip` of the following page, if there is one.
///
/// With `limit` 0 and `skip < total_count` this is `skip` itself, so the next page
/// is the same empty page.
pub fn next_skip(keys: PaginationKeys, total_count: i64) -> Option<i64> {
    let skip = keys.skip + keys.limit;
    (skip < total_count).then_some(skip)
}

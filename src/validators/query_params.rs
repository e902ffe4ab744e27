//! Accepted query parameters per route.

use std::collections::{BTreeSet, HashMap};

use url::form_urlencoded;
use uuid::Uuid;

use crate::constants::{PARAM_LIMIT, PARAM_SKIP};
use crate::errors::ApiError;
use crate::routes::{resolve, RouteKind};

/// Decode a raw query string into name/value pairs, keeping order and repeats.
pub fn query_pairs(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// Decode a raw query string into a map; the last value of a repeated name wins.
pub fn query_map(query: &str) -> HashMap<String, String> {
    query_pairs(query).into_iter().collect()
}

fn paging_params() -> BTreeSet<String> {
    [PARAM_LIMIT, PARAM_SKIP].iter().map(|s| s.to_string()).collect()
}

/// True when the segment addresses a single row: all digits or a UUID.
pub fn is_identifier_segment(segment: &str) -> bool {
    let numeric = !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
    numeric || Uuid::parse_str(segment).is_ok()
}

/// The query parameters `path` accepts.
///
/// Registered routes decide by kind. Unregistered paths fall back to the shape of the
/// last segment.
pub fn expected_params(path: &str) -> BTreeSet<String> {
    match resolve(path) {
        RouteKind::Detail(_) => BTreeSet::new(),
        RouteKind::Root | RouteKind::List(_) | RouteKind::Nested { .. } => paging_params(),
        RouteKind::Unknown => {
            let last = path.rsplit('/').next().unwrap_or_default();
            if is_identifier_segment(last) {
                BTreeSet::new()
            } else {
                paging_params()
            }
        }
    }
}

/// Reject any received name outside `expected`.
pub fn check_for_bad_params<'a, I>(received: I, expected: &BTreeSet<String>) -> Result<(), ApiError>
where
    I: IntoIterator<Item = &'a str>,
{
    let unexpected: BTreeSet<String> = received
        .into_iter()
        .filter(|name| !expected.contains(*name))
        .map(str::to_string)
        .collect();

    if unexpected.is_empty() {
        Ok(())
    } else {
        Err(ApiError::BadQueryParameter(unexpected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_params_for_detail_routes() {
        assert!(expected_params("/species/1").is_empty());
        assert!(expected_params("/sites/foo-bar").is_empty());
        assert!(expected_params("/surveys/00005d07-e9f9-12b0-838c-c1407d4bb709").is_empty());
    }

    #[test]
    fn test_expected_params_for_list_routes() {
        assert_eq!(expected_params("/species"), paging_params());
        assert_eq!(expected_params("/species/2/sites"), paging_params());
        assert_eq!(expected_params("/sites/foo-bar/species"), paging_params());
    }

    #[test]
    fn test_expected_params_for_unknown_paths() {
        assert!(expected_params("/fish/42").is_empty());
        assert!(expected_params("/a/b/00005d07-e9f9-12b0-838c-c1407d4bb709").is_empty());
        assert_eq!(expected_params("/fish/heads"), paging_params());
    }

    #[test]
    fn test_no_bad_params() {
        assert!(check_for_bad_params(["limit", "skip"], &paging_params()).is_ok());
        assert!(check_for_bad_params(Vec::<&str>::new(), &BTreeSet::new()).is_ok());
    }

    #[test]
    fn test_bad_params_are_all_named() {
        match check_for_bad_params(["limit", "skip", "where", "where"], &paging_params()) {
            Err(ApiError::BadQueryParameter(names)) => {
                assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["where".to_string()]);
            }
            other => panic!("expected BadQueryParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_query_map_last_value_wins() {
        let map = query_map("skip=1&limit=2&skip=3");
        assert_eq!(map["skip"], "3");
        assert_eq!(map["limit"], "2");
    }

    #[test]
    fn test_is_identifier_segment() {
        assert!(is_identifier_segment("123"));
        assert!(is_identifier_segment("b2cd2911-147a-402b-a6f5-776f37d8194c"));
        assert!(!is_identifier_segment(""));
        assert!(!is_identifier_segment("-5"));
        assert!(!is_identifier_segment("species"));
    }
}

//! Path shape to route kind lookup used by the middleware.

use crate::models::Resource;

/// What a request path addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Root,
    /// A top-level collection; responses get the pagination envelope.
    List(Resource),
    Detail(Resource),
    /// Rows of `child` associated with one `parent` row.
    Nested { parent: Resource, child: Resource },
    Unknown,
}

/// Classify `path` against the registered routes.
pub fn resolve(path: &str) -> RouteKind {
    if path == "/" {
        return RouteKind::Root;
    }
    let Some(rest) = path.strip_prefix('/') else {
        return RouteKind::Unknown;
    };

    let segments: Vec<&str> = rest.split('/').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return RouteKind::Unknown;
    }
    let Some(resource) = Resource::from_segment(segments[0]) else {
        return RouteKind::Unknown;
    };

    match (resource, &segments[1..]) {
        (_, []) => RouteKind::List(resource),
        (_, [_id]) => RouteKind::Detail(resource),
        (Resource::Species, [_id, "sites"]) => RouteKind::Nested {
            parent: Resource::Species,
            child: Resource::Sites,
        },
        (Resource::Sites, [_id, "species"]) => RouteKind::Nested {
            parent: Resource::Sites,
            child: Resource::Species,
        },
        _ => RouteKind::Unknown,
    }
}

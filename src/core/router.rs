//! # Router Registry
//!
//! Maps a location path to the element that owns the screen.
//!
//! ```text
//! "/"  → Layout   (children: none)
//! "*"  → NotFound (catch-all, always last)
//! ```
//!
//! Routes are tried in declaration order. A route matches when its segments
//! equal the leading segments of the path; it is selected when nothing is left
//! over, or when one of its children matches what is left over. `*` swallows
//! any remainder.

use log::debug;
use std::collections::HashSet;
use std::fmt;

pub const CATCH_ALL: &str = "*";

/// The renderable element a route points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Layout,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub element: Element,
    pub children: Vec<Route>,
}

impl Route {
    pub fn new(path: impl Into<String>, element: Element) -> Self {
        Self {
            path: path.into(),
            element,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }

    fn is_catch_all(&self) -> bool {
        self.path == CATCH_ALL
    }

    fn segments(&self) -> Vec<&str> {
        split_segments(&self.path)
    }
}

/// The routes `zzmenu` ships with.
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new("/", Element::Layout).with_children(Vec::new()),
        Route::new(CATCH_ALL, Element::NotFound),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    Empty,
    InvalidPath(String),
    DuplicatePath(String),
    UnreachableAfterCatchAll(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Empty => write!(f, "route table is empty"),
            RouteError::InvalidPath(p) => {
                write!(f, "top-level route '{p}' must start with '/' or be '*'")
            }
            RouteError::DuplicatePath(p) => write!(f, "route '{p}' is declared twice"),
            RouteError::UnreachableAfterCatchAll(p) => {
                write!(f, "route '{p}' follows a catch-all and can never match")
            }
        }
    }
}

impl std::error::Error for RouteError {}

/// Result of resolving a path: matched routes from outermost to innermost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub path: String,
    pub chain: Vec<&'a Route>,
}

impl RouteMatch<'_> {
    /// The element that owns the screen. Layout has no outlet, so nested
    /// elements are never drawn over it.
    pub fn element(&self) -> Element {
        self.chain[0].element
    }

    pub fn depth(&self) -> usize {
        self.chain.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        if routes.is_empty() {
            return Err(RouteError::Empty);
        }
        for route in &routes {
            if !route.is_catch_all() && !route.path.starts_with('/') {
                return Err(RouteError::InvalidPath(route.path.clone()));
            }
        }
        validate_siblings(&routes)?;
        Ok(Self { routes })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let path = normalize_path(path);
        let segments = split_segments(&path);
        let chain = match_routes(&self.routes, &segments)?;
        debug!("Resolved '{}' through {} route(s)", path, chain.len());
        Some(RouteMatch { path, chain })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self {
            routes: default_routes(),
        }
    }
}

fn validate_siblings(routes: &[Route]) -> Result<(), RouteError> {
    let mut seen = HashSet::new();
    let mut after_catch_all = false;
    for route in routes {
        if after_catch_all {
            return Err(RouteError::UnreachableAfterCatchAll(route.path.clone()));
        }
        if !seen.insert(route.segments()) {
            return Err(RouteError::DuplicatePath(route.path.clone()));
        }
        after_catch_all = route.is_catch_all();
        validate_siblings(&route.children)?;
    }
    Ok(())
}

fn match_routes<'a>(routes: &'a [Route], segments: &[&str]) -> Option<Vec<&'a Route>> {
    for route in routes {
        if route.is_catch_all() {
            return Some(vec![route]);
        }

        let own = route.segments();
        if own.len() > segments.len() || own[..] != segments[..own.len()] {
            continue;
        }

        let rest = &segments[own.len()..];
        if rest.is_empty() {
            return Some(vec![route]);
        }
        if let Some(mut tail) = match_routes(&route.children, rest) {
            tail.insert(0, route);
            return Some(tail);
        }
    }
    None
}

/// Normalizes a location: drops query and fragment, collapses `//`, drops
/// trailing `/`, and always starts with `/`.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments = split_segments(path);
    format!("/{}", segments.join("/"))
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_resolves_to_layout() {
        let router = Router::default();
        let matched = router.resolve("/").unwrap();
        assert_eq!(matched.element(), Element::Layout);
        assert_eq!(matched.depth(), 1);
        assert_eq!(matched.path, "/");
    }

    #[test]
    fn test_root_has_no_children() {
        let router = Router::default();
        assert!(router.routes()[0].children.is_empty());
    }

    #[test]
    fn test_unknown_path_hits_catch_all() {
        let router = Router::default();
        for path in ["/orders", "/login", "/a/b/c", "/error"] {
            let matched = router.resolve(path).unwrap();
            assert_eq!(matched.element(), Element::NotFound, "path {path}");
        }
    }

    #[test]
    fn test_query_fragment_and_slashes_ignored() {
        let router = Router::default();
        for path in ["", "/?table=3", "/#top", "//", "/?x=1#y"] {
            let matched = router.resolve(path).unwrap();
            assert_eq!(matched.element(), Element::Layout, "path {path:?}");
        }
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("menu/"), "/menu");
        assert_eq!(normalize_path("//menu//dishes/?id=2"), "/menu/dishes");
    }

    #[test]
    fn test_without_catch_all_unmatched_is_none() {
        let router = Router::new(vec![Route::new("/", Element::Layout)]).unwrap();
        assert!(router.resolve("/missing").is_none());
    }

    #[test]
    fn test_nested_children_resolve_in_chain() {
        let router = Router::new(vec![
            Route::new("/", Element::Layout).with_children(vec![
                Route::new("orders", Element::Layout),
                Route::new(CATCH_ALL, Element::NotFound),
            ]),
        ])
        .unwrap();

        let matched = router.resolve("/orders").unwrap();
        assert_eq!(matched.depth(), 2);
        assert_eq!(matched.chain[1].path, "orders");
        // The outer layout still owns the screen
        assert_eq!(matched.element(), Element::Layout);

        let missing = router.resolve("/nope").unwrap();
        assert_eq!(missing.chain[1].element, Element::NotFound);
    }

    #[test]
    fn test_declaration_order_wins() {
        let router = Router::new(vec![
            Route::new("/", Element::Layout),
            Route::new("/menu", Element::NotFound),
        ])
        .unwrap();
        assert_eq!(router.resolve("/menu").unwrap().element(), Element::NotFound);
    }

    #[test]
    fn test_route_after_catch_all_rejected() {
        let err = Router::new(vec![
            Route::new(CATCH_ALL, Element::NotFound),
            Route::new("/", Element::Layout),
        ])
        .unwrap_err();
        assert_eq!(err, RouteError::UnreachableAfterCatchAll("/".to_string()));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = Router::new(vec![
            Route::new("/", Element::Layout),
            Route::new("//", Element::NotFound),
        ])
        .unwrap_err();
        assert_eq!(err, RouteError::DuplicatePath("//".to_string()));
    }

    #[test]
    fn test_relative_top_level_path_rejected() {
        let err = Router::new(vec![Route::new("menu", Element::Layout)]).unwrap_err();
        assert_eq!(err, RouteError::InvalidPath("menu".to_string()));
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(Router::new(vec![]).unwrap_err(), RouteError::Empty);
    }
}

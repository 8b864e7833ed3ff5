//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the validated route table
//! - Look up the entry for a requested path
//! - Follow a redirect entry exactly once
//! - Return the resolved route, matched or not
//!
//! # Design Decisions
//! - Immutable after construction (shareable via `Arc` without locks)
//! - O(n) scan over the table, first match wins
//! - An unmatched path is not an error: it resolves to a route with no view

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, validate_routes, ValidationErrors};
use crate::navigation::NavigationError;
use crate::routing::location::Location;
use crate::routing::matcher::PathMatcher;
use crate::routing::route::{RouteEntry, RouteTarget, View};

/// The outcome of resolving a location against the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute {
    /// Requested path after any redirect.
    pub path: String,

    /// Path plus query and hash.
    pub full_path: String,

    /// Declared path of the matched entry.
    pub matched: Option<String>,

    pub name: Option<String>,

    /// View to render. `None` leaves the outlet empty.
    pub view: Option<View>,

    /// Full path of the location that redirected here.
    pub redirected_from: Option<String>,

    pub query: Vec<(String, String)>,

    pub hash: String,
}

impl ResolvedRoute {
    /// The location a navigator holds before its first navigation.
    pub fn start() -> Self {
        Self::unmatched(&Location::start())
    }

    fn unmatched(location: &Location) -> Self {
        Self {
            path: location.path().to_string(),
            full_path: location.full_path(),
            matched: None,
            name: None,
            view: None,
            redirected_from: None,
            query: location.query_pairs(),
            hash: location.hash(),
        }
    }

    fn matched(location: &Location, entry: &RouteEntry, view: View) -> Self {
        Self {
            matched: Some(entry.path.clone()),
            name: entry.name.clone(),
            view: Some(view),
            ..Self::unmatched(location)
        }
    }

    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }

    /// True when both routes render the same entry with the same query and
    /// hash. Query keys compare in any order; repeated values of one key
    /// compare in order. Unmatched routes never compare equal.
    pub fn is_same_location(&self, other: &ResolvedRoute) -> bool {
        self.matched.is_some()
            && self.matched == other.matched
            && query_map(&self.query) == query_map(&other.query)
            && self.hash == other.hash
    }
}

fn query_map(query: &[(String, String)]) -> BTreeMap<&str, Vec<&str>> {
    let mut map: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (key, value) in query {
        map.entry(key.as_str()).or_default().push(value.as_str());
    }
    map
}

#[derive(Debug)]
struct CompiledRoute {
    matcher: PathMatcher,
    entry: RouteEntry,
}

/// Immutable route table.
#[derive(Debug)]
pub struct Router {
    routes: Vec<CompiledRoute>,
}

impl Router {
    /// Validate and compile a route table. Entry order is kept.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, ValidationErrors> {
        validate_routes(&entries)?;

        let routes = entries
            .into_iter()
            .map(|entry| CompiledRoute {
                matcher: PathMatcher::new(&entry.path),
                entry,
            })
            .collect::<Vec<_>>();

        tracing::debug!(routes = routes.len(), "Route table compiled");
        Ok(Self { routes })
    }

    /// Build from the `routes` section of the configuration.
    pub fn from_config(config: &RouterConfig) -> Result<Self, ValidationErrors> {
        Self::new(validate_config(config)?)
    }

    /// Entries in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter().map(|r| &r.entry)
    }

    pub fn route_names(&self) -> Vec<&str> {
        self.routes().filter_map(|r| r.name.as_deref()).collect()
    }

    pub fn has_route(&self, name: &str) -> bool {
        self.find_named(name).is_some()
    }

    /// Raw lookup without following redirects.
    pub fn match_path(&self, path: &str) -> Option<&RouteEntry> {
        self.routes
            .iter()
            .find(|r| r.matcher.matches(path))
            .map(|r| &r.entry)
    }

    /// Parse and resolve a location string.
    pub fn resolve(&self, raw: &str) -> Result<ResolvedRoute, NavigationError> {
        Ok(self.resolve_location(&Location::parse(raw)?))
    }

    /// Resolve a named route.
    pub fn resolve_named(&self, name: &str) -> Result<ResolvedRoute, NavigationError> {
        let entry = self
            .find_named(name)
            .ok_or_else(|| NavigationError::UnknownRouteName(name.to_string()))?;
        Ok(self.resolve_location(&Location::from_path(&entry.path)))
    }

    /// Path of a named route.
    pub fn href(&self, name: &str) -> Result<&str, NavigationError> {
        self.find_named(name)
            .map(|entry| entry.path.as_str())
            .ok_or_else(|| NavigationError::UnknownRouteName(name.to_string()))
    }

    /// Resolve a parsed location, following at most one redirect.
    pub fn resolve_location(&self, location: &Location) -> ResolvedRoute {
        match self.match_path(location.path()) {
            Some(entry) => match &entry.target {
                RouteTarget::View(view) => ResolvedRoute::matched(location, entry, *view),
                RouteTarget::Redirect(to) => {
                    let target = location.with_path(to.as_str());
                    tracing::debug!(
                        from = %location.full_path(),
                        to = %target.full_path(),
                        "Redirecting"
                    );
                    let mut resolved = self.resolve_redirect_target(&target);
                    resolved.redirected_from = Some(location.full_path());
                    resolved
                }
            },
            None => {
                tracing::warn!(
                    path = %location.path(),
                    "No match found for location with path \"{}\"",
                    location.path()
                );
                ResolvedRoute::unmatched(location)
            }
        }
    }

    fn resolve_redirect_target(&self, target: &Location) -> ResolvedRoute {
        match self.match_path(target.path()).map(|e| (e, e.view_ref())) {
            Some((entry, Some(view))) => ResolvedRoute::matched(target, entry, view),
            _ => {
                // Validation rules this out for loaded tables.
                tracing::warn!(path = %target.path(), "Redirect target does not render a view");
                ResolvedRoute::unmatched(target)
            }
        }
    }

    fn find_named(&self, name: &str) -> Option<&RouteEntry> {
        self.routes().find(|r| r.name.as_deref() == Some(name))
    }
}

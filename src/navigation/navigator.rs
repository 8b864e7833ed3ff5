//! Navigation driver.
//!
//! # Responsibilities
//! - Resolve navigation targets through the router
//! - Write the final (post-redirect) location to history
//! - Track the current route
//! - Re-resolve on back/forward traversal
//!
//! # Design Decisions
//! - The router is shared (`Arc`), the history is owned
//! - Duplicate navigations are reported, not treated as errors
//! - Failed navigations leave history and the current route untouched

use std::sync::Arc;

use crate::history::History;
use crate::navigation::types::{NavigationOutcome, NavigationResult, NavigationTarget};
use crate::observability::metrics;
use crate::routing::router::{ResolvedRoute, Router};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryAction {
    Push,
    Replace,
}

/// Couples a router with a history strategy.
#[derive(Debug)]
pub struct Navigator<H: History> {
    router: Arc<Router>,
    history: H,
    current: ResolvedRoute,
}

impl<H: History> Navigator<H> {
    /// The current route starts as the unresolved root location.
    pub fn new(router: Arc<Router>, history: H) -> Self {
        Self {
            router,
            history,
            current: ResolvedRoute::start(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn current(&self) -> &ResolvedRoute {
        &self.current
    }

    /// Navigate, appending a history entry.
    pub fn push(&mut self, target: impl Into<NavigationTarget>) -> NavigationResult<NavigationOutcome> {
        self.navigate(target.into(), HistoryAction::Push)
    }

    /// Navigate, overwriting the current history entry.
    pub fn replace(&mut self, target: impl Into<NavigationTarget>) -> NavigationResult<NavigationOutcome> {
        self.navigate(target.into(), HistoryAction::Replace)
    }

    /// Step back one entry. `None` at the start of history.
    pub fn back(&mut self) -> Option<&ResolvedRoute> {
        self.traverse(-1)
    }

    /// Step forward one entry. `None` at the end of history.
    pub fn forward(&mut self) -> Option<&ResolvedRoute> {
        self.traverse(1)
    }

    fn navigate(&mut self, target: NavigationTarget, action: HistoryAction) -> NavigationResult<NavigationOutcome> {
        let resolved = match &target {
            NavigationTarget::Path(path) => self.router.resolve(path),
            NavigationTarget::Named(name) => self.router.resolve_named(name),
        }
        .inspect_err(|e| {
            tracing::warn!(destination = ?target, error = %e, "Navigation failed");
            metrics::record_navigation("failed");
        })?;

        let outcome = if resolved.is_same_location(&self.current) {
            NavigationOutcome::Duplicated(resolved)
        } else {
            match action {
                HistoryAction::Push => self.history.push(&resolved.full_path),
                HistoryAction::Replace => self.history.replace(&resolved.full_path),
            }
            self.current = resolved.clone();
            NavigationOutcome::Completed(resolved)
        };

        tracing::debug!(
            outcome = outcome.label(),
            full_path = %outcome.route().full_path,
            view = ?outcome.route().view,
            "Navigation finished"
        );
        metrics::record_navigation(outcome.label());
        Ok(outcome)
    }

    fn traverse(&mut self, delta: isize) -> Option<&ResolvedRoute> {
        let location = self.history.go(delta)?.to_string();
        let resolved = match self.router.resolve(&location) {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(location = %location, error = %e, "History entry could not be resolved");
                return None;
            }
        };

        if resolved.redirected_from.is_some() {
            self.history.replace(&resolved.full_path);
        }
        tracing::debug!(delta, full_path = %resolved.full_path, "History traversal");
        self.current = resolved;
        Some(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::navigation::types::NavigationError;
    use crate::routing::route::{default_routes, RouteEntry, View, CONNECTION, TABLESIZE};

    fn navigator() -> Navigator<MemoryHistory> {
        let router = Arc::new(Router::new(default_routes()).unwrap());
        Navigator::new(router, MemoryHistory::new())
    }

    #[test]
    fn test_starts_unresolved() {
        let nav = navigator();
        assert_eq!(nav.current().path, "/");
        assert_eq!(nav.current().view, None);
        assert_eq!(nav.history().len(), 1);
    }

    #[test]
    fn test_push_root_records_redirect_target() {
        let mut nav = navigator();
        let outcome = nav.push("/").unwrap();
        assert_eq!(outcome.label(), "redirected");
        assert_eq!(nav.current().view, Some(View::SpMonitor));
        assert_eq!(nav.history().location(), "/sp-monitor");
        assert_eq!(nav.history().len(), 2);
    }

    #[test]
    fn test_replace_does_not_grow_history() {
        let mut nav = navigator();
        nav.replace("/connection").unwrap();
        assert_eq!(nav.history().len(), 1);
        assert_eq!(nav.history().location(), "/connection");
    }

    #[test]
    fn test_duplicate_navigation() {
        let mut nav = navigator();
        nav.push("/connection").unwrap();
        let outcome = nav.push(NavigationTarget::named(CONNECTION)).unwrap();
        assert!(outcome.is_duplicated());
        assert_eq!(nav.history().len(), 2);

        // A different query is a different location.
        let outcome = nav.push("/connection?db=main").unwrap();
        assert!(!outcome.is_duplicated());
        assert_eq!(nav.history().len(), 3);
    }

    #[test]
    fn test_unmatched_is_never_duplicated() {
        let mut nav = navigator();
        assert_eq!(nav.push("/unknown").unwrap().label(), "unmatched");
        assert_eq!(nav.push("/unknown").unwrap().label(), "unmatched");
        assert_eq!(nav.history().len(), 3);
        assert_eq!(nav.current().view, None);
    }

    #[test]
    fn test_failed_navigation_leaves_state() {
        let mut nav = navigator();
        nav.push("/tablesize").unwrap();

        let err = nav.push(NavigationTarget::named("dashboard")).unwrap_err();
        assert_eq!(err, NavigationError::UnknownRouteName("dashboard".into()));
        let err = nav.push("https://example.com/").unwrap_err();
        assert!(matches!(err, NavigationError::InvalidLocation(_)));

        assert_eq!(nav.current().name.as_deref(), Some(TABLESIZE));
        assert_eq!(nav.history().len(), 2);
    }

    #[test]
    fn test_back_and_forward() {
        let mut nav = navigator();
        nav.replace("/").unwrap();
        nav.push("/connection").unwrap();
        nav.push("/tablesize").unwrap();

        assert_eq!(nav.back().and_then(|r| r.view), Some(View::Connection));
        assert_eq!(nav.back().and_then(|r| r.view), Some(View::SpMonitor));
        assert!(nav.back().is_none());
        assert_eq!(nav.current().view, Some(View::SpMonitor));
        assert_eq!(nav.forward().and_then(|r| r.view), Some(View::Connection));
    }

    #[test]
    fn test_traversal_over_encoded_path() {
        let router = Router::new(vec![
            RouteEntry::redirect("/", "/connection"),
            RouteEntry::view("/connection", CONNECTION, View::Connection),
            RouteEntry::view("/table size", TABLESIZE, View::TableSize),
        ])
        .unwrap();
        let mut nav = Navigator::new(Arc::new(router), MemoryHistory::new());
        nav.replace("/").unwrap();
        nav.push(NavigationTarget::named(TABLESIZE)).unwrap();
        assert_eq!(nav.history().location(), "/table size");
        nav.push("/connection").unwrap();

        assert_eq!(nav.back().and_then(|r| r.view), Some(View::TableSize));
        assert_eq!(nav.back().and_then(|r| r.view), Some(View::Connection));
        assert_eq!(nav.forward().and_then(|r| r.view), Some(View::TableSize));

        let outcome = nav.push("/table%20size").unwrap();
        assert!(outcome.is_duplicated());
    }

    #[test]
    fn test_query_order_is_not_a_new_location() {
        let mut nav = navigator();
        nav.push("/connection?a=1&b=2").unwrap();
        let outcome = nav.push("/connection?b=2&a=1").unwrap();
        assert!(outcome.is_duplicated());
        assert_eq!(nav.history().len(), 2);
    }

    #[test]
    fn test_traversal_onto_redirect_rewrites_entry() {
        let router = Arc::new(Router::new(default_routes()).unwrap());
        let mut nav = Navigator::new(router, MemoryHistory::new());
        nav.push("/tablesize").unwrap();

        let route = nav.back().cloned().unwrap();
        assert_eq!(route.view, Some(View::SpMonitor));
        assert_eq!(nav.history().location(), "/sp-monitor");
    }
}

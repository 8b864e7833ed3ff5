//! Navigation targets, outcomes and errors.

use serde::Serialize;
use thiserror::Error;

use crate::routing::router::ResolvedRoute;

/// Where to navigate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// A location string such as "/tablesize?schema=public".
    Path(String),
    /// A named route such as "tablesize".
    Named(String),
}

impl NavigationTarget {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl From<&str> for NavigationTarget {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for NavigationTarget {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

/// Result of a navigation that did not fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "route", rename_all = "snake_case")]
pub enum NavigationOutcome {
    /// The current route changed and history was written.
    Completed(ResolvedRoute),
    /// Target equals the current route; nothing changed.
    Duplicated(ResolvedRoute),
}

impl NavigationOutcome {
    pub fn route(&self) -> &ResolvedRoute {
        match self {
            NavigationOutcome::Completed(route) | NavigationOutcome::Duplicated(route) => route,
        }
    }

    pub fn is_duplicated(&self) -> bool {
        matches!(self, NavigationOutcome::Duplicated(_))
    }

    /// Label used for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            NavigationOutcome::Duplicated(_) => "duplicated",
            NavigationOutcome::Completed(route) if !route.is_matched() => "unmatched",
            NavigationOutcome::Completed(route) if route.redirected_from.is_some() => "redirected",
            NavigationOutcome::Completed(_) => "completed",
        }
    }
}

/// Errors that abort a navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Named navigation to a name no route carries.
    #[error("No route named \"{0}\"")]
    UnknownRouteName(String),

    /// Location is not an app-relative reference.
    #[error("Invalid location \"{0}\"")]
    InvalidLocation(String),
}

/// Result type for navigation operations.
pub type NavigationResult<T> = Result<T, NavigationError>;

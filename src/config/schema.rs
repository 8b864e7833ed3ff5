//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::route::{default_routes, RouteEntry, RouteTarget, View};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// History strategy settings.
    pub history: HistoryConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route table. Falls back to the console's built-in table when absent.
    pub routes: Vec<RouteConfig>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            observability: ObservabilityConfig::default(),
            routes: default_routes().iter().map(RouteConfig::from).collect(),
        }
    }
}

/// History strategy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Base path the application is served under (e.g., "/console/").
    pub base: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            base: "/".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// One route as written in the config file.
///
/// Exactly one of `view` and `redirect` must be set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path to match.
    pub path: String,

    /// Identifier for named navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// View to render.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,

    /// Path to redirect to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl RouteConfig {
    /// Convert to a route entry. `None` if the target is missing or ambiguous.
    pub fn to_entry(&self) -> Option<RouteEntry> {
        let target = match (&self.view, &self.redirect) {
            (Some(view), None) => RouteTarget::View(*view),
            (None, Some(to)) => RouteTarget::Redirect(to.clone()),
            _ => return None,
        };
        Some(RouteEntry {
            path: self.path.clone(),
            name: self.name.clone(),
            target,
        })
    }
}

impl From<&RouteEntry> for RouteConfig {
    fn from(entry: &RouteEntry) -> Self {
        let (view, redirect) = match &entry.target {
            RouteTarget::View(view) => (Some(*view), None),
            RouteTarget::Redirect(to) => (None, Some(to.clone())),
        };
        Self {
            path: entry.path.clone(),
            name: entry.name.clone(),
            view,
            redirect,
        }
    }
}

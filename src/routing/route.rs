//! Route entries and the views they point at.

use serde::{Deserialize, Serialize};

/// Name of the stored-procedure monitor route.
pub const SP_MONITOR: &str = "sp-monitor";
/// Name of the connection overview route.
pub const CONNECTION: &str = "connection";
/// Name of the table size route.
pub const TABLESIZE: &str = "tablesize";

/// A renderable view owned by the host application.
///
/// The router never looks inside a view. It only hands the identifier back
/// to whoever renders the outlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum View {
    SpMonitor,
    Connection,
    TableSize,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::SpMonitor => "SpMonitor",
            View::Connection => "Connection",
            View::TableSize => "TableSize",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a matched entry dispatches to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteTarget {
    /// Render this view.
    View(View),
    /// Re-dispatch to another path (single hop).
    Redirect(String),
}

/// A single path → target mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// Path matched against the requested location.
    pub path: String,

    /// Identifier for named navigation.
    pub name: Option<String>,

    pub target: RouteTarget,
}

impl RouteEntry {
    /// Create a named entry rendering `view`.
    pub fn view(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            name: Some(name.into()),
            target: RouteTarget::View(view),
        }
    }

    /// Create an unnamed entry redirecting to `to`.
    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::Redirect(to.into()),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect(_))
    }

    /// The view this entry renders, if it is not a redirect.
    pub fn view_ref(&self) -> Option<View> {
        match self.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        }
    }
}

/// The console's route table.
pub fn default_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::redirect("/", "/sp-monitor"),
        RouteEntry::view("/sp-monitor", SP_MONITOR, View::SpMonitor),
        RouteEntry::view("/connection", CONNECTION, View::Connection),
        RouteEntry::view("/tablesize", TABLESIZE, View::TableSize),
    ]
}

//! Client-side route table for the database console.
//!
//! Maps `/sp-monitor`, `/connection` and `/tablesize` to their views and
//! redirects `/` to `/sp-monitor`.

pub mod config;
pub mod history;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use history::{History, MemoryHistory, WebHistory};
pub use lifecycle::start;
pub use navigation::{NavigationError, NavigationOutcome, NavigationTarget, Navigator};
pub use routing::{ResolvedRoute, RouteEntry, Router, View};

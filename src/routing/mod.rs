//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Requested location ("/tablesize?schema=public")
//!     → location.rs (split path / query / hash)
//!     → router.rs (route lookup, one redirect hop)
//!     → matcher.rs (case-insensitive path comparison)
//!     → Return: ResolvedRoute (view or empty outlet)
//!
//! Route Compilation (at startup):
//!     RouteConfig[] or default_routes()
//!     → validation (unique paths and names, root redirect)
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same input always resolves to the same route
//! - First match wins (declaration order)
//! - No catch-all: unmatched paths resolve to an empty outlet

pub mod location;
pub mod matcher;
pub mod route;
pub mod router;

pub use location::Location;
pub use route::{default_routes, RouteEntry, RouteTarget, View, CONNECTION, SP_MONITOR, TABLESIZE};
pub use router::{ResolvedRoute, Router};

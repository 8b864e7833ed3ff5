//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! push / replace (path or route name)
//!     → Router resolves (one redirect hop)
//!     → duplicate check against the current route
//!     → History records the final full path
//!     → current route updated
//!
//! back / forward
//!     → History moves its cursor
//!     → Router re-resolves the entry
//! ```

pub mod navigator;
pub mod types;

pub use navigator::Navigator;
pub use types::{NavigationError, NavigationOutcome, NavigationResult, NavigationTarget};

//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Validate → Build Router → Wrap in Navigator → Initial navigation
//! ```
//!
//! # Design Decisions
//! - Fail fast: an invalid route table is fatal
//! - The navigator is returned to the caller, never stored globally

pub mod startup;

pub use startup::{start, StartupError};

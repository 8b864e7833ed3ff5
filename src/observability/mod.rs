//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router / Navigator / startup produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (navigation counters via the metrics facade)
//!
//! Consumers:
//!     → stderr (fmt layer, filtered by RUST_LOG or config)
//!     → whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Structured fields, not interpolated strings, for paths and views
//! - No recorder is installed here; without one, counters are no-ops

pub mod logging;
pub mod metrics;

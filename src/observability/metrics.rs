//! Metrics collection.
//!
//! # Metrics
//! - `router_navigations_total` (counter): navigations by outcome
//!   (`completed`, `redirected`, `unmatched`, `duplicated`, `failed`)

pub const NAVIGATIONS_TOTAL: &str = "router_navigations_total";

/// Count one navigation.
pub fn record_navigation(outcome: &'static str) {
    metrics::counter!(NAVIGATIONS_TOTAL, "outcome" => outcome).increment(1);
}

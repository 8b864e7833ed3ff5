//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration and build the router
//! - Attach the host's history strategy
//! - Perform the initial navigation to the history's current location
//!
//! # Design Decisions
//! - The initial navigation replaces the first history entry
//! - An unmatched initial location is not fatal (empty outlet)

use std::sync::Arc;

use thiserror::Error;

use crate::config::{RouterConfig, ValidationErrors};
use crate::history::History;
use crate::navigation::{NavigationError, Navigator};
use crate::routing::Router;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid route table: {0}")]
    Config(#[from] ValidationErrors),

    #[error("Initial navigation failed: {0}")]
    Navigation(#[from] NavigationError),
}

/// Build the router from `config` and navigate to where `history` currently is.
pub fn start<H: History>(config: &RouterConfig, history: H) -> Result<Navigator<H>, StartupError> {
    let router = Arc::new(Router::from_config(config)?);
    tracing::info!(
        routes = router.routes().count(),
        names = ?router.route_names(),
        base = %history.base(),
        "Router initialized"
    );

    let initial = history.location().to_string();
    let mut navigator = Navigator::new(router, history);
    navigator.replace(initial.as_str())?;

    let current = navigator.current();
    tracing::info!(
        full_path = %current.full_path,
        view = ?current.view,
        redirected_from = ?current.redirected_from,
        "Initial navigation complete"
    );
    Ok(navigator)
}

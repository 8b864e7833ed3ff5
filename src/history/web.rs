//! Path-based browser history.
//!
//! # Responsibilities
//! - Normalize the base the application is served under
//! - Map between address bar paths and app-relative locations
//! - Keep the entry stack the way the browser would
//!
//! # Design Decisions
//! - No hash mode: a `#` in the base and everything after it is dropped
//! - A browser path outside the base is kept whole rather than rejected

use crate::history::{History, HistoryStack};

/// Normalize a base path: leading slash, no trailing slash, no hash.
/// The root base normalizes to "".
pub fn normalize_base(base: &str) -> String {
    let base = base.split('#').next().unwrap_or_default();
    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[derive(Debug, Clone)]
pub struct WebHistory {
    base: String,
    stack: HistoryStack,
}

impl WebHistory {
    /// History served under `base`, starting at the app root.
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            stack: HistoryStack::new("/"),
        }
    }

    /// History served under `base`, starting at the address bar path
    /// `browser_path` (e.g., "/console/tablesize?schema=public").
    pub fn with_browser_path(base: &str, browser_path: &str) -> Self {
        let base = normalize_base(base);
        let location = strip_base(&base, browser_path);
        Self {
            base,
            stack: HistoryStack::new(location),
        }
    }
}

fn strip_base(base: &str, browser_path: &str) -> String {
    let rest = match browser_path.strip_prefix(base) {
        Some(rest) if !base.is_empty() && (rest.is_empty() || rest.starts_with(['/', '?', '#'])) => rest,
        _ => browser_path,
    };
    if rest.starts_with('/') {
        rest.to_string()
    } else {
        format!("/{}", rest)
    }
}

impl History for WebHistory {
    fn base(&self) -> &str {
        &self.base
    }

    fn location(&self) -> &str {
        self.stack.current()
    }

    fn push(&mut self, location: &str) {
        tracing::trace!(href = %self.create_href(location), "history.pushState");
        self.stack.push(location);
    }

    fn replace(&mut self, location: &str) {
        tracing::trace!(href = %self.create_href(location), "history.replaceState");
        self.stack.replace(location);
    }

    fn go(&mut self, delta: isize) -> Option<&str> {
        self.stack.go(delta)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn position(&self) -> usize {
        self.stack.position()
    }
}

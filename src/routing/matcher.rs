//! Path matching logic.
//!
//! # Responsibilities
//! - Compare a requested path against a declared route path
//! - Normalize paths the same way for lookup and for validation
//!
//! # Design Decisions
//! - Matching is case-insensitive
//! - A single trailing slash is optional (`/connection/` matches `/connection`)
//! - No parameters or wildcards, so matching is plain string equality

/// Normalize a path for comparison.
///
/// Lowercases and strips one trailing slash. The root path stays `/`.
pub fn normalize_path(path: &str) -> String {
    let lowered = path.to_lowercase();
    match lowered.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => lowered,
    }
}

/// Matches a request path against one declared route path.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    normalized: String,
}

impl PathMatcher {
    pub fn new(path: &str) -> Self {
        Self {
            normalized: normalize_path(path),
        }
    }

    /// Returns true if `path` selects this route.
    pub fn matches(&self, path: &str) -> bool {
        normalize_path(path) == self.normalized
    }
}

//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Enforce the route table invariants: unique paths, unique names,
//!   exactly one root entry and it redirects
//! - Check redirect targets point at a view entry (single hop)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Paths are compared the same way the matcher compares them
//! - Runs before a table is accepted into a Router

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::matcher::normalize_path;
use crate::routing::route::{RouteEntry, RouteTarget};

/// Characters that would introduce parameters, wildcards, query or hash.
const RESERVED_PATH_CHARS: [char; 4] = [':', '*', '?', '#'];

/// A single violated invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route path \"{0}\" must start with '/'")]
    PathNotAbsolute(String),

    #[error("route path \"{path}\" contains unsupported character '{ch}'")]
    UnsupportedPathSyntax { path: String, ch: char },

    #[error("duplicate route path \"{0}\"")]
    DuplicatePath(String),

    #[error("duplicate route name \"{0}\"")]
    DuplicateName(String),

    #[error("no route for \"/\"")]
    MissingRoot,

    #[error("route \"/\" must be a redirect")]
    RootNotRedirect,

    #[error("route \"{0}\" must set exactly one of `view` or `redirect`")]
    AmbiguousTarget(String),

    #[error("view route \"{0}\" has no name")]
    UnnamedView(String),

    #[error("redirect from \"{from}\" targets unknown path \"{to}\"")]
    UnknownRedirectTarget { from: String, to: String },

    #[error("redirect from \"{from}\" targets another redirect \"{to}\"")]
    ChainedRedirect { from: String, to: String },
}

/// Every invariant a table violates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_errors(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convert the configured routes and validate the resulting table.
pub fn validate_config(config: &RouterConfig) -> Result<Vec<RouteEntry>, ValidationErrors> {
    let mut errors = Vec::new();
    let mut entries = Vec::with_capacity(config.routes.len());

    for route in &config.routes {
        match route.to_entry() {
            Some(entry) => entries.push(entry),
            None => errors.push(ValidationError::AmbiguousTarget(route.path.clone())),
        }
    }

    if let Err(ValidationErrors(table_errors)) = validate_routes(&entries) {
        errors.extend(table_errors);
    }

    if errors.is_empty() {
        Ok(entries)
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Validate a route table.
pub fn validate_routes(entries: &[RouteEntry]) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    let mut paths = HashSet::new();
    let mut names = HashSet::new();

    for entry in entries {
        if !entry.path.starts_with('/') {
            errors.push(ValidationError::PathNotAbsolute(entry.path.clone()));
        }
        if let Some(ch) = entry.path.chars().find(|c| RESERVED_PATH_CHARS.contains(c)) {
            errors.push(ValidationError::UnsupportedPathSyntax {
                path: entry.path.clone(),
                ch,
            });
        }
        if !paths.insert(normalize_path(&entry.path)) {
            errors.push(ValidationError::DuplicatePath(entry.path.clone()));
        }

        match &entry.name {
            Some(name) => {
                if !names.insert(name.as_str()) {
                    errors.push(ValidationError::DuplicateName(name.clone()));
                }
            }
            None if !entry.is_redirect() => {
                errors.push(ValidationError::UnnamedView(entry.path.clone()));
            }
            None => {}
        }

        if let RouteTarget::Redirect(to) = &entry.target {
            let target = entries
                .iter()
                .find(|e| normalize_path(&e.path) == normalize_path(to));
            match target {
                None => errors.push(ValidationError::UnknownRedirectTarget {
                    from: entry.path.clone(),
                    to: to.clone(),
                }),
                Some(t) if t.is_redirect() => errors.push(ValidationError::ChainedRedirect {
                    from: entry.path.clone(),
                    to: to.clone(),
                }),
                Some(_) => {}
            }
        }
    }

    match entries.iter().find(|e| normalize_path(&e.path) == "/") {
        None => errors.push(ValidationError::MissingRoot),
        Some(root) if !root.is_redirect() => errors.push(ValidationError::RootNotRedirect),
        Some(_) => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationErrors};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    tracing::debug!(path = ?path, routes = config.routes.len(), "Configuration loaded");
    Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    let config: RouterConfig = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route::View;

    #[test]
    fn test_parse_full_table() {
        let config = parse_config(
            r#"
            [history]
            base = "/console/"

            [[routes]]
            path = "/"
            redirect = "/connection"

            [[routes]]
            path = "/connection"
            name = "connection"
            view = "Connection"
            "#,
        )
        .unwrap();

        assert_eq!(config.history.base, "/console/");
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[1].view, Some(View::Connection));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[[routes]]\npath = 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_view_is_parse_error() {
        let err = parse_config(
            "[[routes]]\npath = \"/\"\nredirect = \"/x\"\n\n[[routes]]\npath = \"/x\"\nname = \"x\"\nview = \"Dashboard\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error() {
        let err = parse_config("[[routes]]\npath = \"/connection\"\nname = \"connection\"\nview = \"Connection\"\n")
            .unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.errors().len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/console-router.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

//! Requested locations.
//!
//! A location string like `/tablesize?schema=public#top` is split into path,
//! query and hash. Only the path is used for matching. Query and hash ride
//! along to the resolved route.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::navigation::NavigationError;

/// Placeholder origin used to resolve app-relative references.
/// `.invalid` is reserved, so no real location can share it.
const APP_ORIGIN: &str = "http://console.invalid/";

/// A parsed, app-relative location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Option<String>,
    hash: Option<String>,
}

impl Location {
    /// Parse an app-relative location.
    ///
    /// Relative paths resolve against `/`. Absolute URLs and
    /// protocol-relative references to any other origin are rejected.
    /// The path is percent-decoded so it compares against declared paths
    /// as written.
    pub fn parse(raw: &str) -> Result<Self, NavigationError> {
        let invalid = || NavigationError::InvalidLocation(raw.to_string());

        let base = Url::parse(APP_ORIGIN).map_err(|_| invalid())?;
        let url = base.join(raw).map_err(|_| invalid())?;
        if url.origin() != base.origin() {
            return Err(invalid());
        }

        let path = percent_decode_str(url.path())
            .decode_utf8()
            .map_err(|_| invalid())?
            .into_owned();

        Ok(Self {
            path,
            query: url.query().filter(|q| !q.is_empty()).map(str::to_string),
            hash: url.fragment().filter(|h| !h.is_empty()).map(str::to_string),
        })
    }

    /// A bare path with no query or hash. The path is taken as-is.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
            hash: None,
        }
    }

    /// The root location a fresh history starts at.
    pub fn start() -> Self {
        Self::from_path("/")
    }

    /// Same query and hash, different path.
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: self.query.clone(),
            hash: self.hash.clone(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decoded query pairs, in order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match &self.query {
            Some(q) => url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// The hash including its leading `#`, or empty.
    pub fn hash(&self) -> String {
        self.hash
            .as_ref()
            .map(|h| format!("#{}", h))
            .unwrap_or_default()
    }

    /// Path, query and hash as one string.
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if let Some(q) = &self.query {
            full.push('?');
            full.push_str(q);
        }
        full.push_str(&self.hash());
        full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        let loc = Location::parse("/connection").unwrap();
        assert_eq!(loc.path(), "/connection");
        assert!(loc.query_pairs().is_empty());
        assert_eq!(loc.hash(), "");
        assert_eq!(loc.full_path(), "/connection");
    }

    #[test]
    fn test_query_and_hash() {
        let loc = Location::parse("/tablesize?schema=public&sort=desc#top").unwrap();
        assert_eq!(loc.path(), "/tablesize");
        assert_eq!(
            loc.query_pairs(),
            vec![
                ("schema".to_string(), "public".to_string()),
                ("sort".to_string(), "desc".to_string()),
            ]
        );
        assert_eq!(loc.hash(), "#top");
        assert_eq!(loc.full_path(), "/tablesize?schema=public&sort=desc#top");
    }

    #[test]
    fn test_empty_query_and_hash_dropped() {
        let loc = Location::parse("/connection?#").unwrap();
        assert_eq!(loc.full_path(), "/connection");
    }

    #[test]
    fn test_relative_and_empty() {
        assert_eq!(Location::parse("tablesize").unwrap().path(), "/tablesize");
        assert_eq!(Location::parse("").unwrap().path(), "/");
        assert_eq!(Location::parse("/a/../connection").unwrap().path(), "/connection");
    }

    #[test]
    fn test_foreign_origin_rejected() {
        assert_eq!(
            Location::parse("https://example.com/connection"),
            Err(NavigationError::InvalidLocation("https://example.com/connection".into()))
        );
        assert!(Location::parse("//example.com/connection").is_err());
    }

    #[test]
    fn test_path_is_decoded() {
        assert_eq!(Location::parse("/table size").unwrap().path(), "/table size");
        assert_eq!(Location::parse("/table%20size").unwrap().path(), "/table size");
        assert_eq!(Location::parse("/größe?x=1").unwrap().full_path(), "/größe?x=1");
        assert!(Location::parse("/bad%FF").is_err());
    }

    #[test]
    fn test_with_path_keeps_query_and_hash() {
        let loc = Location::parse("/?tab=2#x").unwrap().with_path("/sp-monitor");
        assert_eq!(loc.full_path(), "/sp-monitor?tab=2#x");
    }
}

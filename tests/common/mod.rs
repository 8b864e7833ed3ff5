//! Shared helpers for integration tests.

use std::path::PathBuf;

use console_router::{start, MemoryHistory, Navigator, RouterConfig};

/// Navigator over the built-in table, already at its initial route.
#[allow(dead_code)]
pub fn default_navigator() -> Navigator<MemoryHistory> {
    start(&RouterConfig::default(), MemoryHistory::new()).unwrap()
}

/// Write `content` to a uniquely named file in the temp dir.
#[allow(dead_code)]
pub fn write_temp_config(tag: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "console-router-{}-{}.toml",
        tag,
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}

//! History strategy subsystem.
//!
//! # Data Flow
//! ```text
//! Navigator resolves a location
//!     → History::push / History::replace (record final full path)
//!
//! Back / forward
//!     → History::go(delta) moves the cursor
//!     → Navigator re-resolves the location it lands on
//! ```
//!
//! # Design Decisions
//! - The router never touches history; only the navigator writes to it
//! - Entries are app-relative; the base prefix is applied when building hrefs
//! - Path-based only, never a hash fragment

pub mod memory;
pub mod web;

pub use memory::MemoryHistory;
pub use web::WebHistory;

/// Navigation history supplied by the hosting environment.
pub trait History: Send + std::fmt::Debug {
    /// Normalized base prefix ("" when served at the root).
    fn base(&self) -> &str;

    /// Current app-relative location.
    fn location(&self) -> &str;

    /// Append an entry, discarding any forward entries.
    fn push(&mut self, location: &str);

    /// Overwrite the current entry.
    fn replace(&mut self, location: &str);

    /// Move the cursor by `delta`. Returns the new location, or `None`
    /// (without moving) if that would leave the stack.
    fn go(&mut self, delta: isize) -> Option<&str>;

    fn back(&mut self) -> Option<&str> {
        self.go(-1)
    }

    fn forward(&mut self) -> Option<&str> {
        self.go(1)
    }

    /// Number of entries.
    fn len(&self) -> usize;

    /// Index of the current entry.
    fn position(&self) -> usize;

    /// Address bar form of a location.
    fn create_href(&self, location: &str) -> String {
        format!("{}{}", self.base(), location)
    }
}

/// Entry stack shared by the history implementations.
#[derive(Debug, Clone)]
pub(crate) struct HistoryStack {
    entries: Vec<String>,
    position: usize,
}

impl HistoryStack {
    pub(crate) fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            position: 0,
        }
    }

    pub(crate) fn current(&self) -> &str {
        &self.entries[self.position]
    }

    pub(crate) fn push(&mut self, location: &str) {
        self.entries.truncate(self.position + 1);
        self.entries.push(location.to_string());
        self.position = self.entries.len() - 1;
    }

    pub(crate) fn replace(&mut self, location: &str) {
        self.entries[self.position] = location.to_string();
    }

    pub(crate) fn go(&mut self, delta: isize) -> Option<&str> {
        let target = self.position.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.position = target;
        Some(self.current())
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }
}

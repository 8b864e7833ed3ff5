//! In-memory history for hosts without an address bar (tests, CLI).

use crate::history::{History, HistoryStack};

#[derive(Debug, Clone)]
pub struct MemoryHistory {
    stack: HistoryStack,
}

impl MemoryHistory {
    /// Start at `/`.
    pub fn new() -> Self {
        Self::at("/")
    }

    /// Start at `location`.
    pub fn at(location: impl Into<String>) -> Self {
        Self {
            stack: HistoryStack::new(location),
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MemoryHistory {
    fn base(&self) -> &str {
        ""
    }

    fn location(&self) -> &str {
        self.stack.current()
    }

    fn push(&mut self, location: &str) {
        self.stack.push(location);
    }

    fn replace(&mut self, location: &str) {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_history() {
        let mut history = MemoryHistory::new();
        assert_eq!(history.location(), "/");
        history.push("/connection");
        history.push("/tablesize");
        assert_eq!(history.back(), Some("/connection"));
        assert_eq!(history.forward(), Some("/tablesize"));
        assert_eq!(history.forward(), None);
        assert_eq!(history.create_href("/tablesize"), "/tablesize");
    }
}

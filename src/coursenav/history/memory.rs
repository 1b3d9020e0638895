use super::{HistoryEntry, HistoryMode, HistoryStack, Navigator};
use crate::error::Result;
use crate::query::Location;

/// In-memory navigation for testing and embedding.
/// Does NOT persist anything.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    stack: HistoryStack,
    navigations: usize,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::at(Location::default())
    }

    pub fn at(start: Location) -> Self {
        Self {
            stack: HistoryStack::new(start),
            navigations: 0,
        }
    }

    /// Starts at `href`. Intended for tests and fixtures.
    pub fn at_href(href: &str) -> Result<Self> {
        Ok(Self::at(Location::parse(href)?))
    }

    /// Number of navigations that actually changed the stack.
    pub fn navigations(&self) -> usize {
        self.navigations
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn href(&self) -> String {
        self.stack.current().location.href()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for MemoryHistory {
    fn current(&self) -> Result<Location> {
        Ok(self.stack.current().location.clone())
    }

    fn navigate(&mut self, location: Location, mode: HistoryMode) -> Result<()> {
        if self.stack.navigate(location, mode) {
            self.navigations += 1;
        }
        Ok(())
    }

    fn back(&mut self) -> Result<bool> {
        Ok(self.stack.back())
    }

    fn forward(&mut self) -> Result<bool> {
        Ok(self.stack.forward())
    }

    fn entries(&self) -> Result<(Vec<HistoryEntry>, usize)> {
        Ok((self.stack.entries().to_vec(), self.stack.active()))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct HistoryFixture {
        pub history: MemoryHistory,
    }

    impl Default for HistoryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl HistoryFixture {
        pub fn new() -> Self {
            Self {
                history: MemoryHistory::new(),
            }
        }

        pub fn at(href: &str) -> Self {
            Self {
                history: MemoryHistory::at_href(href).unwrap(),
            }
        }

        pub fn then_push(mut self, href: &str) -> Self {
            let location = Location::parse(href).unwrap();
            self.history.navigate(location, HistoryMode::Push).unwrap();
            self
        }

        pub fn then_back(mut self) -> Self {
            self.history.back().unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::HistoryFixture;
    use super::*;

    #[test]
    fn counts_only_effective_navigations() {
        let mut history = MemoryHistory::at_href("/lessons").unwrap();
        let next = Location::parse("/lessons?day=2").unwrap();
        history.navigate(next.clone(), HistoryMode::Replace).unwrap();
        history.navigate(next, HistoryMode::Replace).unwrap();
        assert_eq!(history.navigations(), 1);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn fixture_builds_back_stack() {
        let fx = HistoryFixture::at("/a").then_push("/b").then_push("/c").then_back();
        let (entries, active) = fx.history.entries().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(active, 1);
        assert_eq!(fx.history.href(), "/b");
    }
}

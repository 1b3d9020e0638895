//! # Navigation Layer
//!
//! The core never talks to a browser or a router. It depends on the
//! [`Navigator`] trait, a minimal navigation-platform capability: read the
//! current location, and write a new one either as a new history entry
//! ([`HistoryMode::Push`]) or over the current one ([`HistoryMode::Replace`]).
//!
//! ## Implementations
//!
//! - [`memory::MemoryHistory`]: in-memory history for tests and embedding.
//! - [`fs::FileHistory`]: the same stack persisted as `session.json` in a
//!   directory, so the CLI keeps its place between invocations.
//!
//! Both are thin wrappers around [`HistoryStack`], which owns the rules:
//!
//! - `push` drops every entry ahead of the active one, then appends.
//! - `replace` overwrites the active entry.
//! - Navigating to the active location is a no-op in either mode, so writing
//!   the same state twice never produces two entries.
//! - An optional cap evicts the oldest entries.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::query::Location;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod fs;
pub mod memory;

/// Whether a write creates a back-navigable entry or overwrites the current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    #[default]
    Replace,
    Push,
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryMode::Replace => f.write_str("replace"),
            HistoryMode::Push => f.write_str("push"),
        }
    }
}

impl FromStr for HistoryMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "replace" => Ok(HistoryMode::Replace),
            "push" => Ok(HistoryMode::Push),
            other => Err(format!(
                "Invalid history mode: {} (expected replace or push)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub location: Location,
    pub visited_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            visited_at: Utc::now(),
        }
    }
}

/// Abstract navigation platform.
pub trait Navigator {
    /// The location currently shown.
    fn current(&self) -> Result<Location>;

    /// Moves to `location`. Must not add an entry when `location` is already current.
    fn navigate(&mut self, location: Location, mode: HistoryMode) -> Result<()>;

    /// Steps one entry back. Returns false at the oldest entry.
    fn back(&mut self) -> Result<bool>;

    /// Steps one entry forward. Returns false at the newest entry.
    fn forward(&mut self) -> Result<bool>;

    /// All entries, oldest first, and the index of the active one.
    fn entries(&self) -> Result<(Vec<HistoryEntry>, usize)>;
}

/// A browser-style back/forward stack.
///
/// Always holds at least one entry; the active entry is tracked by a
/// [`Cursor`] so back/forward saturate at either end.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: Cursor<HistoryEntry>,
    limit: Option<usize>,
}

impl HistoryStack {
    pub fn new(start: Location) -> Self {
        Self {
            entries: Cursor::new(vec![HistoryEntry::new(start)]),
            limit: None,
        }
    }

    /// Restores a stack from saved entries. An empty list starts at `/`.
    pub fn from_entries(entries: Vec<HistoryEntry>, active: usize) -> Self {
        if entries.is_empty() {
            return Self::new(Location::default());
        }
        Self {
            entries: Cursor::with_index(entries, active),
            limit: None,
        }
    }

    /// Caps the number of entries; the oldest are evicted first. Zero means unlimited.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = (limit > 0).then_some(limit);
        self.enforce_limit();
        self
    }

    pub fn current(&self) -> &HistoryEntry {
        // Never empty: every constructor seeds one entry and nothing removes the last.
        &self.entries.items()[self.active()]
    }

    pub fn active(&self) -> usize {
        self.entries.current_index().unwrap_or_default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        self.entries.items()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies a navigation. Returns whether the stack changed.
    pub fn navigate(&mut self, location: Location, mode: HistoryMode) -> bool {
        if self.current().location == location {
            tracing::trace!(href = %location, "navigation to active location skipped");
            return false;
        }
        let active = self.active();
        let entry = HistoryEntry::new(location);
        match mode {
            HistoryMode::Replace => {
                self.entries.update_items(|entries| entries[active] = entry);
            }
            HistoryMode::Push => {
                self.entries.update_items(|entries| {
                    entries.truncate(active + 1);
                    entries.push(entry);
                });
                self.entries.seek(active + 1);
                self.enforce_limit();
            }
        }
        true
    }

    pub fn back(&mut self) -> bool {
        self.entries.prev()
    }

    pub fn forward(&mut self) -> bool {
        self.entries.next()
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        let len = self.entries.len();
        if len <= limit {
            return;
        }
        let excess = len - limit;
        let active = self.active().saturating_sub(excess);
        tracing::debug!(evicted = excess, "history limit reached");
        self.entries.update_items(|entries| {
            entries.drain(..excess);
        });
        self.entries.seek(active);
    }
}

use super::{HistoryEntry, HistoryMode, HistoryStack, Navigator};
use crate::error::{NavError, Result};
use crate::query::Location;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SESSION_FILENAME: &str = "session.json";

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    active: usize,
    entries: Vec<HistoryEntry>,
}

/// History persisted as `session.json` inside `root`.
///
/// The whole stack is read on open and written back after every change, so
/// separate processes see each other's navigation. A missing file starts a
/// fresh session at `start`.
pub struct FileHistory {
    root: PathBuf,
    stack: HistoryStack,
}

impl FileHistory {
    pub fn open(root: impl Into<PathBuf>, start: Location, limit: usize) -> Result<Self> {
        let root = root.into();
        let stack = match load_session(&root)? {
            Some(session) => HistoryStack::from_entries(session.entries, session.active),
            None => HistoryStack::new(start),
        }
        .with_limit(limit);
        Ok(Self { root, stack })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn session_path(&self) -> PathBuf {
        self.root.join(SESSION_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NavError::Io)?;
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        self.ensure_dir()?;
        let session = SessionFile {
            active: self.stack.active(),
            entries: self.stack.entries().to_vec(),
        };
        let content = serde_json::to_string_pretty(&session).map_err(NavError::Serialization)?;
        fs::write(self.session_path(), content).map_err(NavError::Io)?;
        tracing::debug!(path = %self.session_path().display(), "session saved");
        Ok(())
    }
}

fn load_session(root: &Path) -> Result<Option<SessionFile>> {
    let path = root.join(SESSION_FILENAME);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path).map_err(NavError::Io)?;
    let session = serde_json::from_str(&content).map_err(NavError::Serialization)?;
    Ok(Some(session))
}

impl Navigator for FileHistory {
    fn current(&self) -> Result<Location> {
        Ok(self.stack.current().location.clone())
    }

    fn navigate(&mut self, location: Location, mode: HistoryMode) -> Result<()> {
        if self.stack.navigate(location, mode) {
            self.save()?;
        }
        Ok(())
    }

    fn back(&mut self) -> Result<bool> {
        let moved = self.stack.back();
        if moved {
            self.save()?;
        }
        Ok(moved)
    }

    fn forward(&mut self) -> Result<bool> {
        let moved = self.stack.forward();
        if moved {
            self.save()?;
        }
        Ok(moved)
    }

    fn entries(&self) -> Result<(Vec<HistoryEntry>, usize)> {
        Ok((self.stack.entries().to_vec(), self.stack.active()))
    }
}

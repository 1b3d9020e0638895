use crate::config::NavConfig;
use crate::cursor::CursorPosition;
use crate::error::Result;
use crate::history::{HistoryEntry, Navigator};
use crate::params::{LessonParams, LessonQuery};
use crate::query::Location;
use crate::state::QuerySchema;
use std::path::PathBuf;

pub mod config;
pub mod day;
pub mod history;
pub mod open;
pub mod set;
pub mod show;
pub mod travel;

/// Where the session and its config live.
#[derive(Debug, Clone)]
pub struct NavPaths {
    pub home: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub location: Option<Location>,
    pub lesson: Option<LessonParams>,
    pub day: Option<CursorPosition>,
    pub entries: Vec<HistoryEntry>,
    pub active: Option<usize>,
    pub config: Option<NavConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_lesson(mut self, lesson: LessonParams) -> Self {
        self.lesson = Some(lesson);
        self
    }

    pub fn with_day(mut self, day: CursorPosition) -> Self {
        self.day = Some(day);
        self
    }

    pub fn with_entries(mut self, entries: Vec<HistoryEntry>, active: usize) -> Self {
        self.entries = entries;
        self.active = Some(active);
        self
    }

    pub fn with_config(mut self, config: NavConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// The current location and the lesson params it decodes to.
pub(crate) fn snapshot<N: Navigator>(nav: &N) -> Result<CmdResult> {
    let location = nav.current()?;
    let lesson = LessonQuery::new().read(&location.query);
    Ok(CmdResult::default()
        .with_location(location)
        .with_lesson(lesson))
}

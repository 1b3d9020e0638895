//! Lesson page parameters: `?levelId=LEVEL_B1&day=7&lesson=GRAMMAR`.

use crate::codec::{BoundedIntCodec, EnumCodec, QueryEnum, MAX_DAY, MIN_DAY};
use crate::query::QueryMap;
use crate::state::{Param, QuerySchema};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelId {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl QueryEnum for LevelId {
    const VARIANTS: &'static [Self] = &[
        LevelId::A1,
        LevelId::A2,
        LevelId::B1,
        LevelId::B2,
        LevelId::C1,
        LevelId::C2,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            LevelId::A1 => "LEVEL_A1",
            LevelId::A2 => "LEVEL_A2",
            LevelId::B1 => "LEVEL_B1",
            LevelId::B2 => "LEVEL_B2",
            LevelId::C1 => "LEVEL_C1",
            LevelId::C2 => "LEVEL_C2",
        }
    }
}

impl LevelId {
    /// Short label shown in level pickers ("A1", "B2", ...).
    pub fn label(&self) -> &'static str {
        let full = self.as_str();
        full.strip_prefix("LEVEL_").unwrap_or(full)
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LessonId {
    Read,
    Write,
    Speak,
    Today,
    Listen,
    Grammar,
    Pictures,
    QA,
    DailyTest,
    PhrasalVerbs,
    Idioms,
}

impl QueryEnum for LessonId {
    const VARIANTS: &'static [Self] = &[
        LessonId::Read,
        LessonId::Write,
        LessonId::Speak,
        LessonId::Today,
        LessonId::Listen,
        LessonId::Grammar,
        LessonId::Pictures,
        LessonId::QA,
        LessonId::DailyTest,
        LessonId::PhrasalVerbs,
        LessonId::Idioms,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            LessonId::Read => "READ",
            LessonId::Write => "WRITE",
            LessonId::Speak => "SPEAK",
            LessonId::Today => "TODAY",
            LessonId::Listen => "LISTEN",
            LessonId::Grammar => "GRAMMAR",
            LessonId::Pictures => "PICTURES",
            LessonId::QA => "Q_A",
            LessonId::DailyTest => "DAILY_TEST",
            LessonId::PhrasalVerbs => "PHRASAL_VERBS",
            LessonId::Idioms => "IDIOMS",
        }
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonParams {
    pub level: LevelId,
    pub day: i64,
    pub lesson: LessonId,
}

impl Default for LessonParams {
    fn default() -> Self {
        LessonQuery::new().defaults()
    }
}

pub const LEVEL_KEY: &str = "levelId";
pub const DAY_KEY: &str = "day";
pub const LESSON_KEY: &str = "lesson";

#[derive(Debug, Clone)]
pub struct LessonQuery {
    pub level: Param<EnumCodec<LevelId>>,
    pub day: Param<BoundedIntCodec>,
    pub lesson: Param<EnumCodec<LessonId>>,
}

impl LessonQuery {
    pub fn new() -> Self {
        Self {
            level: Param::new(LEVEL_KEY, EnumCodec::new(), LevelId::A1),
            day: Param::new(DAY_KEY, BoundedIntCodec::day(), MIN_DAY),
            lesson: Param::new(LESSON_KEY, EnumCodec::new(), LessonId::Read),
        }
    }
}

impl Default for LessonQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl QuerySchema for LessonQuery {
    type State = LessonParams;

    fn keys(&self) -> Vec<&str> {
        vec![self.level.key(), self.day.key(), self.lesson.key()]
    }

    fn read(&self, query: &QueryMap) -> LessonParams {
        LessonParams {
            level: self.level.read(query),
            day: self.day.read(query),
            lesson: self.lesson.read(query),
        }
    }

    fn write(&self, prev: &LessonParams, next: &LessonParams, query: &mut QueryMap) {
        self.level.write_changed(query, &prev.level, &next.level);
        self.day.write_changed(query, &prev.day, &next.day);
        self.lesson.write_changed(query, &prev.lesson, &next.lesson);
    }
}

/// The lesson days, in order, as the item sequence for a day cursor.
pub fn lesson_days() -> Vec<i64> {
    (MIN_DAY..=MAX_DAY).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::memory::MemoryHistory;
    use crate::history::Navigator;
    use crate::state::{QueryStates, SyncOptions};

    #[test]
    fn defaults_match_first_lesson() {
        let params = LessonParams::default();
        assert_eq!(params.level, LevelId::A1);
        assert_eq!(params.day, 1);
        assert_eq!(params.lesson, LessonId::Read);
    }

    #[test]
    fn reads_a_deep_link() {
        let q = QueryMap::parse("levelId=LEVEL_C1&day=12&lesson=PHRASAL_VERBS");
        let params = LessonQuery::new().read(&q);
        assert_eq!(params.level, LevelId::C1);
        assert_eq!(params.day, 12);
        assert_eq!(params.lesson, LessonId::PhrasalVerbs);
    }

    #[test]
    fn tampered_link_degrades_per_field() {
        let q = QueryMap::parse("levelId=LEVEL_Z9&day=51&lesson=Q_A");
        let params = LessonQuery::new().read(&q);
        assert_eq!(params.level, LevelId::A1);
        assert_eq!(params.day, 1);
        assert_eq!(params.lesson, LessonId::QA);
    }

    #[test]
    fn changing_level_keeps_day() {
        let mut nav = MemoryHistory::at_href("/lessons?day=9").unwrap();
        let mut states =
            QueryStates::load(LessonQuery::new(), &nav, SyncOptions::default()).unwrap();
        states.set(&mut nav, |p| p.level = LevelId::B2).unwrap();
        assert_eq!(nav.current().unwrap().href(), "/lessons?levelId=LEVEL_B2&day=9");
        assert_eq!(states.get().day, 9);
    }

    #[test]
    fn level_labels_drop_prefix() {
        assert_eq!(LevelId::B1.label(), "B1");
    }

    #[test]
    fn lesson_days_cover_full_range() {
        let days = lesson_days();
        assert_eq!(days.len(), 50);
        assert_eq!(days.first(), Some(&1));
        assert_eq!(days.last(), Some(&50));
    }
}

use crate::codec::MIN_DAY;
use crate::commands::{snapshot, CmdMessage, CmdResult};
use crate::cursor::Cursor;
use crate::error::Result;
use crate::history::{HistoryMode, Navigator};
use crate::params::{lesson_days, LessonQuery};
use crate::state::{QueryStates, SyncOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAction {
    Next,
    Prev,
    Reset,
    /// Jump to a day number; out-of-range days clamp to the first or last.
    Seek(i64),
}

/// Steps the lesson-day cursor and writes the resulting `day` param.
pub fn run<N: Navigator>(nav: &mut N, mode: HistoryMode, action: DayAction) -> Result<CmdResult> {
    let mut states = QueryStates::load(LessonQuery::new(), nav, SyncOptions { history: mode })?;
    let start = day_index(states.get().day);
    let mut days = Cursor::with_index(lesson_days(), start);

    let moved = match action {
        DayAction::Next => days.next(),
        DayAction::Prev => days.prev(),
        DayAction::Reset => days.reset(),
        DayAction::Seek(day) => days.seek(day_index(day)),
    };

    if let Some(&day) = days.current() {
        states.set(nav, |params| params.day = day)?;
    }

    let mut result = snapshot(nav)?.with_day(days.position());
    if !moved {
        let note = match action {
            DayAction::Next if days.is_last() => "Already on the last day",
            DayAction::Prev | DayAction::Reset if days.is_first() => "Already on the first day",
            _ => "Day unchanged",
        };
        result.add_message(CmdMessage::info(note));
    }
    Ok(result)
}

fn day_index(day: i64) -> usize {
    usize::try_from(day.saturating_sub(MIN_DAY)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::memory::MemoryHistory;

    fn day_of(result: &CmdResult) -> i64 {
        result.lesson.as_ref().map(|l| l.day).unwrap_or_default()
    }

    #[test]
    fn next_advances_and_writes_day() {
        let mut nav = MemoryHistory::at_href("/lessons?levelId=LEVEL_B1").unwrap();
        let result = run(&mut nav, HistoryMode::Replace, DayAction::Next).unwrap();
        assert_eq!(day_of(&result), 2);
        assert_eq!(nav.href(), "/lessons?levelId=LEVEL_B1&day=2");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn next_saturates_on_last_day() {
        let mut nav = MemoryHistory::at_href("/lessons?day=50").unwrap();
        let result = run(&mut nav, HistoryMode::Push, DayAction::Next).unwrap();
        assert_eq!(day_of(&result), 50);
        assert_eq!(nav.len(), 1);
        assert_eq!(result.messages[0].content, "Already on the last day");
    }

    #[test]
    fn prev_on_first_day_is_noop() {
        let mut nav = MemoryHistory::at_href("/lessons").unwrap();
        let result = run(&mut nav, HistoryMode::Replace, DayAction::Prev).unwrap();
        assert_eq!(day_of(&result), 1);
        assert_eq!(nav.navigations(), 0);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn reset_removes_day_key() {
        let mut nav = MemoryHistory::at_href("/lessons?day=17&lesson=WRITE").unwrap();
        run(&mut nav, HistoryMode::Replace, DayAction::Reset).unwrap();
        assert_eq!(nav.href(), "/lessons?lesson=WRITE");
    }

    #[test]
    fn seek_clamps_to_available_days() {
        let mut nav = MemoryHistory::at_href("/lessons").unwrap();
        let result = run(&mut nav, HistoryMode::Replace, DayAction::Seek(99)).unwrap();
        assert_eq!(day_of(&result), 50);

        let result = run(&mut nav, HistoryMode::Replace, DayAction::Seek(-4)).unwrap();
        assert_eq!(day_of(&result), 1);
        assert_eq!(nav.href(), "/lessons");
    }

    #[test]
    fn reports_cursor_position() {
        let mut nav = MemoryHistory::at_href("/lessons?day=9").unwrap();
        let result = run(&mut nav, HistoryMode::Replace, DayAction::Prev).unwrap();
        let position = result.day.unwrap();
        assert_eq!(position.index, Some(7));
        assert_eq!(position.len, 50);
    }

    #[test]
    fn push_mode_makes_steps_undoable() {
        let mut nav = MemoryHistory::at_href("/lessons").unwrap();
        run(&mut nav, HistoryMode::Push, DayAction::Next).unwrap();
        run(&mut nav, HistoryMode::Push, DayAction::Next).unwrap();
        assert!(nav.back().unwrap());
        assert_eq!(nav.href(), "/lessons?day=2");
    }
}

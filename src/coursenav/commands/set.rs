use crate::codec::Codec;
use crate::commands::{snapshot, CmdMessage, CmdResult};
use crate::error::Result;
use crate::history::{HistoryMode, Navigator};
use crate::params::{LessonParams, LessonQuery};
use crate::state::{Param, QuerySchema, QueryStates, SyncOptions};

/// Writes lesson params from `key=value` assignments.
///
/// All assignments are validated before anything is written; a single bad
/// one leaves the location untouched. An empty value (`day=`) resets the
/// field to its default.
pub fn run<N, S>(nav: &mut N, mode: HistoryMode, assignments: &[S]) -> Result<CmdResult>
where
    N: Navigator,
    S: AsRef<str>,
{
    let schema = LessonQuery::new();
    let mut states = QueryStates::load(schema.clone(), nav, SyncOptions { history: mode })?;
    let mut next = *states.get();
    let mut errors = Vec::new();

    for assignment in assignments {
        let assignment = assignment.as_ref();
        let Some((key, value)) = assignment.split_once('=') else {
            errors.push(CmdMessage::error(format!(
                "Invalid assignment: {} (expected key=value)",
                assignment
            )));
            continue;
        };
        if let Err(message) = apply(&schema, &mut next, key, value) {
            errors.push(CmdMessage::error(message));
        }
    }

    if !errors.is_empty() {
        let mut result = snapshot(nav)?;
        result.messages.extend(errors);
        return Ok(result);
    }

    let changed = states.replace(nav, next)?;
    let mut result = snapshot(nav)?;
    if !changed {
        result.add_message(CmdMessage::info("Nothing to change"));
    }
    Ok(result)
}

fn apply(
    schema: &LessonQuery,
    params: &mut LessonParams,
    key: &str,
    value: &str,
) -> std::result::Result<(), String> {
    if key == schema.level.key() {
        params.level = decode(&schema.level, value)?;
    } else if key == schema.day.key() {
        params.day = decode(&schema.day, value)?;
    } else if key == schema.lesson.key() {
        params.lesson = decode(&schema.lesson, value)?;
    } else {
        return Err(format!(
            "Unknown lesson param: {} (expected {})",
            key,
            schema.keys().join(", ")
        ));
    }
    Ok(())
}

fn decode<C: Codec>(param: &Param<C>, value: &str) -> std::result::Result<C::Value, String> {
    if value.is_empty() {
        return Ok(param.default_value().clone());
    }
    param
        .codec()
        .decode(value)
        .ok_or_else(|| format!("Invalid value for {}: {}", param.key(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::memory::MemoryHistory;
    use crate::params::{LessonId, LevelId};

    #[test]
    fn sets_several_params_at_once() {
        let mut nav = MemoryHistory::at_href("/lessons").unwrap();
        let result = run(
            &mut nav,
            HistoryMode::Replace,
            &["levelId=LEVEL_C2", "lesson=IDIOMS", "day=12"],
        )
        .unwrap();
        let lesson = result.lesson.unwrap();
        assert_eq!(lesson.level, LevelId::C2);
        assert_eq!(lesson.lesson, LessonId::Idioms);
        assert_eq!(lesson.day, 12);
        assert_eq!(nav.len(), 1);
    }

    #[test]
    fn push_mode_adds_an_entry() {
        let mut nav = MemoryHistory::at_href("/lessons").unwrap();
        run(&mut nav, HistoryMode::Push, &["day=2"]).unwrap();
        assert_eq!(nav.len(), 2);
    }

    #[test]
    fn one_bad_assignment_writes_nothing() {
        let mut nav = MemoryHistory::at_href("/lessons?day=3").unwrap();
        let result = run(
            &mut nav,
            HistoryMode::Replace,
            &["day=9", "colour=red", "lesson=NAP", "oops"],
        )
        .unwrap();
        assert_eq!(result.messages.len(), 3);
        assert!(result.has_errors());
        assert_eq!(nav.href(), "/lessons?day=3");
        assert_eq!(nav.navigations(), 0);
    }

    #[test]
    fn out_of_range_day_is_rejected() {
        let mut nav = MemoryHistory::at_href("/lessons").unwrap();
        let result = run(&mut nav, HistoryMode::Replace, &["day=51"]).unwrap();
        assert!(result.has_errors());
    }

    #[test]
    fn empty_value_resets_field() {
        let mut nav = MemoryHistory::at_href("/lessons?day=8&lesson=SPEAK").unwrap();
        run(&mut nav, HistoryMode::Replace, &["day="]).unwrap();
        assert_eq!(nav.href(), "/lessons?lesson=SPEAK");
    }

    #[test]
    fn unchanged_values_report_nothing_to_change() {
        let mut nav = MemoryHistory::at_href("/lessons?day=8").unwrap();
        let result = run(&mut nav, HistoryMode::Push, &["day=8"]).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(!result.has_errors());
        assert_eq!(nav.len(), 1);
    }
}

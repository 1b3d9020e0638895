//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It dispatches to `commands/*.rs` and returns `Result<CmdResult>`;
//! it never prints, formats or exits.
//!
//! `NavApi<N: Navigator>` is generic over the navigation platform:
//! - Production: `NavApi<FileHistory>`
//! - Testing: `NavApi<MemoryHistory>`
//!
//! Writes take a [`HistoryMode`] per call, so a client can honor the
//! configured default and still let the user override it.
//!
//! API tests verify dispatch only. Command behavior is tested in the command
//! modules, history rules in `history/`.

use crate::commands;
use crate::error::Result;
use crate::history::{HistoryMode, Navigator};

pub struct NavApi<N: Navigator> {
    nav: N,
    paths: commands::NavPaths,
}

impl<N: Navigator> NavApi<N> {
    pub fn new(nav: N, paths: commands::NavPaths) -> Self {
        Self { nav, paths }
    }

    pub fn show(&self) -> Result<commands::CmdResult> {
        commands::show::run(&self.nav)
    }

    pub fn open(&mut self, href: &str) -> Result<commands::CmdResult> {
        commands::open::run(&mut self.nav, href)
    }

    pub fn set_params<S: AsRef<str>>(
        &mut self,
        mode: HistoryMode,
        assignments: &[S],
    ) -> Result<commands::CmdResult> {
        commands::set::run(&mut self.nav, mode, assignments)
    }

    pub fn day(&mut self, mode: HistoryMode, action: DayAction) -> Result<commands::CmdResult> {
        commands::day::run(&mut self.nav, mode, action)
    }

    pub fn back(&mut self) -> Result<commands::CmdResult> {
        commands::travel::back(&mut self.nav)
    }

    pub fn forward(&mut self) -> Result<commands::CmdResult> {
        commands::travel::forward(&mut self.nav)
    }

    pub fn history(&self) -> Result<commands::CmdResult> {
        commands::history::run(&self.nav)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn navigator(&self) -> &N {
        &self.nav
    }

    pub fn paths(&self) -> &commands::NavPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::day::DayAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, NavPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::memory::MemoryHistory;

    fn api(href: &str) -> NavApi<MemoryHistory> {
        NavApi::new(
            MemoryHistory::at_href(href).unwrap(),
            NavPaths {
                home: std::env::temp_dir().join("coursenav-api-tests"),
            },
        )
    }

    #[test]
    fn show_reads_current_location() {
        let api = api("/lessons?day=5");
        let result = api.show().unwrap();
        assert_eq!(result.lesson.unwrap().day, 5);
    }

    #[test]
    fn set_params_dispatches_with_mode() {
        let mut api = api("/lessons");
        api.set_params(HistoryMode::Push, &["day=3"]).unwrap();
        assert_eq!(api.navigator().len(), 2);
    }

    #[test]
    fn day_then_back() {
        let mut api = api("/lessons");
        api.day(HistoryMode::Push, DayAction::Next).unwrap();
        let result = api.back().unwrap();
        assert_eq!(result.lesson.unwrap().day, 1);
        let result = api.forward().unwrap();
        assert_eq!(result.lesson.unwrap().day, 2);
    }

    #[test]
    fn open_and_history() {
        let mut api = api("/lessons");
        api.open("/grammar?lesson=GRAMMAR").unwrap();
        let result = api.history().unwrap();
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.active, Some(1));
    }
}

use crate::commands::{snapshot, CmdMessage, CmdResult};
use crate::error::{NavError, Result};
use crate::history::{HistoryMode, Navigator};

/// Deep-links to `href`, relative to the current location.
pub fn run<N: Navigator>(nav: &mut N, href: &str) -> Result<CmdResult> {
    if href.trim().is_empty() {
        return Err(NavError::Api("Location cannot be empty".into()));
    }
    let current = nav.current()?;
    let target = current.resolve(href)?;
    if target == current {
        let mut result = snapshot(nav)?;
        result.add_message(CmdMessage::info(format!("Already at {}", current)));
        return Ok(result);
    }

    nav.navigate(target, HistoryMode::Push)?;
    snapshot(nav)
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::history::Navigator;

/// Lists every history entry, oldest first, with the active index.
pub fn run<N: Navigator>(nav: &N) -> Result<CmdResult> {
    let (entries, active) = nav.entries()?;
    let mut result = CmdResult::default().with_entries(entries, active);
    if result.entries.len() == 1 {
        result.add_message(CmdMessage::info("No earlier or later entries"));
    }
    Ok(result)
}

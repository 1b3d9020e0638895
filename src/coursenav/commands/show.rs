use crate::commands::{snapshot, CmdResult};
use crate::error::Result;
use crate::history::Navigator;

pub fn run<N: Navigator>(nav: &N) -> Result<CmdResult> {
    snapshot(nav)
}

use crate::commands::{snapshot, CmdMessage, CmdResult};
use crate::error::Result;
use crate::history::Navigator;

pub fn back<N: Navigator>(nav: &mut N) -> Result<CmdResult> {
    let moved = nav.back()?;
    let mut result = snapshot(nav)?;
    if !moved {
        result.add_message(CmdMessage::warning("Already at the oldest entry"));
    }
    Ok(result)
}

pub fn forward<N: Navigator>(nav: &mut N) -> Result<CmdResult> {
    let moved = nav.forward()?;
    let mut result = snapshot(nav)?;
    if !moved {
        result.add_message(CmdMessage::warning("Already at the newest entry"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::memory::fixtures::HistoryFixture;

    #[test]
    fn back_then_forward_round_trips() {
        let mut fx = HistoryFixture::at("/lessons?day=1").then_push("/lessons?day=2");

        let result = back(&mut fx.history).unwrap();
        assert_eq!(result.lesson.unwrap().day, 1);
        assert!(result.messages.is_empty());

        let result = forward(&mut fx.history).unwrap();
        assert_eq!(result.lesson.unwrap().day, 2);
    }

    #[test]
    fn edges_warn_instead_of_failing() {
        let mut fx = HistoryFixture::at("/lessons");
        assert_eq!(back(&mut fx.history).unwrap().messages.len(), 1);
        assert_eq!(forward(&mut fx.history).unwrap().messages.len(), 1);
        assert_eq!(fx.history.href(), "/lessons");
    }
}

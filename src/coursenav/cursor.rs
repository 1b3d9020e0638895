//! # Bounded Cursor
//!
//! A [`Cursor`] is a position over a finite, ordered sequence that can never
//! point outside of it. It backs lesson-day pickers, picture carousels,
//! question/answer walkthroughs and onboarding steps.
//!
//! ## States
//!
//! ```text
//!   empty  ──replace_items(non-empty)──▶  positioned(i)
//!     ▲                                        │
//!     └────────replace_items(empty)────────────┘
//! ```
//!
//! Within `positioned(i)`, every step saturates instead of wrapping or
//! failing:
//!
//! - `next`:  `i -> min(i + 1, len - 1)`
//! - `prev`:  `i -> max(i - 1, 0)`
//! - `reset`: `i -> 0`
//! - `seek(t)`: `i -> clamp(t, 0, len - 1)`
//!
//! Replacing the items re-clamps the index, so a cursor over a shrunk
//! sequence never references a position past its end.
//!
//! Derived values (`current`, `next_items`, `is_last`, ...) are computed on
//! demand and never stored.

use crate::observe::{Listeners, Subscription};
use std::fmt;

/// Snapshot of a cursor's position, passed to change listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    /// `None` when the cursor is empty.
    pub index: Option<usize>,
    pub len: usize,
}

pub struct Cursor<T> {
    items: Vec<T>,
    index: usize,
    listeners: Listeners<CursorPosition>,
}

impl<T> Cursor<T> {
    /// Creates a cursor at the first item.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_index(items, 0)
    }

    /// Creates a cursor at `initial`, clamped into range.
    pub fn with_index(items: Vec<T>, initial: usize) -> Self {
        let index = clamp_index(initial, items.len());
        Self {
            items,
            index,
            listeners: Listeners::new(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.index)
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// Items after the current one, in order. Empty at the last index.
    pub fn next_items(&self) -> &[T] {
        self.items.get(self.index + 1..).unwrap_or_default()
    }

    pub fn has_next_items(&self) -> bool {
        !self.next_items().is_empty()
    }

    pub fn has_prev_items(&self) -> bool {
        !self.items.is_empty() && self.index > 0
    }

    pub fn is_first(&self) -> bool {
        !self.items.is_empty() && self.index == 0
    }

    pub fn is_last(&self) -> bool {
        !self.items.is_empty() && self.index == self.items.len() - 1
    }

    pub fn position(&self) -> CursorPosition {
        CursorPosition {
            index: self.current_index(),
            len: self.items.len(),
        }
    }

    /// Steps forward, stopping at the last item. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        self.move_to(self.index.saturating_add(1))
    }

    /// Steps back, stopping at the first item. Returns whether it moved.
    pub fn prev(&mut self) -> bool {
        self.move_to(self.index.saturating_sub(1))
    }

    /// Returns to the first item.
    pub fn reset(&mut self) -> bool {
        self.move_to(0)
    }

    /// Jumps to `target`, clamped into range.
    pub fn seek(&mut self, target: usize) -> bool {
        self.move_to(target)
    }

    /// Swaps the underlying sequence and re-clamps the index against it.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.update_items(|current| *current = items);
    }

    /// Edits the sequence in place, then re-clamps like [`Cursor::replace_items`].
    pub fn update_items(&mut self, edit: impl FnOnce(&mut Vec<T>)) {
        let before = self.position();
        edit(&mut self.items);
        self.index = clamp_index(self.index, self.items.len());
        let after = self.position();
        if after != before {
            tracing::trace!(?before, ?after, "cursor re-clamped after item swap");
            self.listeners.notify(&after);
        }
    }

    pub fn subscribe(&self, callback: impl Fn(&CursorPosition) + 'static) -> Subscription {
        self.listeners.subscribe(callback)
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    fn move_to(&mut self, target: usize) -> bool {
        let clamped = clamp_index(target, self.items.len());
        if clamped == self.index {
            return false;
        }
        tracing::trace!(from = self.index, to = clamped, len = self.items.len(), "cursor step");
        self.index = clamped;
        self.listeners.notify(&self.position());
        true
    }
}

impl<T: Clone> Clone for Cursor<T> {
    /// Clones items and position. Listeners stay with the original.
    fn clone(&self) -> Self {
        Self::with_index(self.items.clone(), self.index)
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("items", &self.items)
            .field("index", &self.current_index())
            .finish()
    }
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Clamps `index` into `0..len`; an empty sequence pins it to 0.
pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn abc() -> Cursor<char> {
        Cursor::new(vec!['A', 'B', 'C'])
    }

    #[test]
    fn starts_at_first_item() {
        let c = abc();
        assert_eq!(c.current(), Some(&'A'));
        assert_eq!(c.current_index(), Some(0));
        assert!(c.is_first());
        assert!(!c.is_last());
        assert_eq!(c.next_items(), &['B', 'C']);
    }

    #[test]
    fn initial_index_is_clamped() {
        let c = Cursor::with_index(vec!['A', 'B', 'C'], 10);
        assert_eq!(c.current_index(), Some(2));
        assert!(c.is_last());
    }

    #[test]
    fn next_saturates_at_last() {
        let mut c = Cursor::with_index(vec!['A', 'B', 'C'], 2);
        assert!(!c.next());
        assert_eq!(c.current_index(), Some(2));
        assert!(!c.has_next_items());
        assert!(c.next_items().is_empty());
    }

    #[test]
    fn prev_saturates_at_first() {
        let mut c = abc();
        assert!(!c.prev());
        assert_eq!(c.current_index(), Some(0));
        assert!(!c.has_prev_items());
    }

    #[test]
    fn steps_walk_the_sequence() {
        let mut c = abc();
        assert!(c.next());
        assert_eq!(c.current(), Some(&'B'));
        assert!(c.has_prev_items());
        assert!(c.has_next_items());
        assert!(c.prev());
        assert_eq!(c.current(), Some(&'A'));
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut c = Cursor::with_index(vec![1, 2, 3, 4], 3);
        assert!(c.reset());
        assert_eq!(c.current_index(), Some(0));
    }

    #[test]
    fn seek_clamps_out_of_range_targets() {
        let mut c = abc();
        c.seek(99);
        assert_eq!(c.current_index(), Some(2));
        c.seek(1);
        assert_eq!(c.current(), Some(&'B'));
    }

    #[test]
    fn empty_cursor_has_no_current_item() {
        let mut c: Cursor<u8> = Cursor::with_index(Vec::new(), 3);
        assert_eq!(c.current(), None);
        assert_eq!(c.current_index(), None);
        assert!(!c.is_first());
        assert!(!c.is_last());
        assert!(!c.has_next_items());
        assert!(!c.has_prev_items());
        assert!(!c.next());
        assert!(!c.prev());
        assert!(!c.reset());
        assert_eq!(c.current_index(), None);
    }

    #[test]
    fn replacing_items_clamps_index() {
        let mut c = Cursor::with_index(vec![1, 2, 3, 4, 5], 4);
        c.replace_items(vec![1, 2]);
        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.current(), Some(&2));
    }

    #[test]
    fn replacing_with_empty_then_non_empty() {
        let mut c = Cursor::with_index(vec![1, 2, 3], 2);
        c.replace_items(Vec::new());
        assert_eq!(c.current_index(), None);
        c.replace_items(vec![7, 8]);
        assert_eq!(c.current(), Some(&7));
    }

    #[test]
    fn update_items_edits_in_place_and_clamps() {
        let mut c = Cursor::with_index(vec![1, 2, 3, 4], 3);
        c.update_items(|items| items[3] = 40);
        assert_eq!(c.current(), Some(&40));
        c.update_items(|items| {
            items.drain(..2);
        });
        assert_eq!(c.items(), &[3, 40]);
        assert_eq!(c.current_index(), Some(1));
    }

    #[test]
    fn listeners_see_only_real_moves() {
        let mut c = abc();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _sub = c.subscribe(move |pos| s.borrow_mut().push(pos.index));

        c.next();
        c.next();
        c.next(); // saturated, no notification
        c.replace_items(vec!['X']);

        assert_eq!(*seen.borrow(), vec![Some(1), Some(2), Some(0)]);
    }

    proptest! {
        #[test]
        fn index_stays_in_bounds(
            len in 0usize..20,
            initial in 0usize..40,
            ops in prop::collection::vec(0u8..5, 0..60),
        ) {
            let mut c = Cursor::with_index((0..len).collect::<Vec<_>>(), initial);
            for op in ops {
                match op {
                    0 => { c.next(); }
                    1 => { c.prev(); }
                    2 => { c.reset(); }
                    3 => { c.seek(initial * 3); }
                    _ => c.replace_items((0..(initial % 7)).collect()),
                }
                match c.current_index() {
                    Some(i) => prop_assert!(i < c.len()),
                    None => prop_assert!(c.is_empty()),
                }
            }
        }
    }
}

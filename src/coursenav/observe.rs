//! Change listeners.
//!
//! [`Listeners`] is the notification half of the core's observer contract:
//! cursors, query states and stores call [`Listeners::notify`] after a change
//! and hosting UIs register callbacks with [`Listeners::subscribe`]. The
//! returned [`Subscription`] unregisters its callback when dropped.
//!
//! Callbacks are held through `Weak` pointers owned by the subscription, so a
//! dropped subscription stops receiving notifications immediately and dead
//! slots are pruned on the next notify. Everything here is single-threaded.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = dyn Fn(&T);

pub struct Listeners<T> {
    slots: RefCell<Vec<Weak<Callback<T>>>>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
        }
    }

    /// Registers `callback`. Keep the returned guard alive for as long as the
    /// callback should fire.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription
    where
        T: 'static,
    {
        let strong: Rc<Callback<T>> = Rc::new(callback);
        self.slots.borrow_mut().push(Rc::downgrade(&strong));
        Subscription {
            _callback: Box::new(strong),
        }
    }

    /// Calls every live callback in registration order.
    pub fn notify(&self, value: &T) {
        // Snapshot first so callbacks may subscribe without a double borrow.
        let live: Vec<Rc<Callback<T>>> = {
            let mut slots = self.slots.borrow_mut();
            slots.retain(|w| w.strong_count() > 0);
            slots.iter().filter_map(Weak::upgrade).collect()
        };
        for callback in live {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.slots
            .borrow()
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("live", &self.len())
            .finish()
    }
}

/// Keeps a callback registered. Drop it to unsubscribe.
pub struct Subscription {
    _callback: Box<dyn std::any::Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Subscription")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn notifies_in_registration_order() {
        let listeners = Listeners::<u32>::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let a = Rc::clone(&log);
        let _s1 = listeners.subscribe(move |v| a.borrow_mut().push(("a", *v)));
        let b = Rc::clone(&log);
        let _s2 = listeners.subscribe(move |v| b.borrow_mut().push(("b", *v)));

        listeners.notify(&7);
        assert_eq!(*log.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn dropping_subscription_stops_notifications() {
        let listeners = Listeners::<u32>::new();
        let hits = Rc::new(Cell::new(0));

        let h = Rc::clone(&hits);
        let sub = listeners.subscribe(move |_| h.set(h.get() + 1));
        listeners.notify(&1);
        drop(sub);
        listeners.notify(&2);

        assert_eq!(hits.get(), 1);
        assert!(listeners.is_empty());
    }

    #[test]
    fn callbacks_may_subscribe_during_notify() {
        let listeners = Rc::new(Listeners::<u32>::new());
        let inner_subs = Rc::new(RefCell::new(Vec::new()));

        let l = Rc::clone(&listeners);
        let subs = Rc::clone(&inner_subs);
        let _outer = listeners.subscribe(move |_| {
            subs.borrow_mut().push(l.subscribe(|_| {}));
        });

        listeners.notify(&1);
        assert_eq!(listeners.len(), 2);
    }
}

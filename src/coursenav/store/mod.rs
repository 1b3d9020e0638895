//! # Scoped Stores
//!
//! Shared UI state (sidebar items, breadcrumb trail, chat visibility) lives
//! in [`Store`] handles that are created where the UI is composed and passed
//! explicitly to whoever needs them. There are no process-wide singletons:
//! two stores created separately never share state, while clones of one
//! handle do.
//!
//! Stores are single-threaded (`Rc`), like the rest of the navigation core.
//! Subscribers are notified after every `set`/`update`, with the new value.

use crate::observe::{Listeners, Subscription};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub mod layout;

pub struct Store<T> {
    inner: Rc<StoreInner<T>>,
}

struct StoreInner<T> {
    value: RefCell<T>,
    listeners: Listeners<T>,
}

impl<T: Clone + 'static> Store<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                value: RefCell::new(initial),
                listeners: Listeners::new(),
            }),
        }
    }

    /// A snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Reads the value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.emit();
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.value.borrow_mut());
        self.emit();
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.inner.listeners.subscribe(callback)
    }

    /// Whether `other` is a handle to the same state.
    pub fn same_as(&self, other: &Store<T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn emit(&self) {
        // Listeners get a snapshot so they may read or write the store themselves.
        let snapshot = self.get();
        self.inner.listeners.notify(&snapshot);
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default + Clone + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.inner.value.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_state() {
        let a = Store::new(false);
        let b = a.clone();
        b.set(true);
        assert!(a.get());
        assert!(a.same_as(&b));
    }

    #[test]
    fn separate_stores_are_isolated() {
        let a = Store::new(0);
        let b = Store::new(0);
        a.set(5);
        assert_eq!(b.get(), 0);
        assert!(!a.same_as(&b));
    }

    #[test]
    fn subscribers_see_updates() {
        let store = Store::new(vec![1]);
        let total = Rc::new(Cell::new(0));
        let t = Rc::clone(&total);
        let _sub = store.subscribe(move |v: &Vec<i32>| t.set(v.iter().sum()));

        store.update(|v| v.push(2));
        assert_eq!(total.get(), 3);
    }

    #[test]
    fn subscribers_may_read_the_store() {
        let store = Store::new(1);
        let seen = Rc::new(Cell::new(0));
        let (s, handle) = (Rc::clone(&seen), store.clone());
        let _sub = store.subscribe(move |_| s.set(handle.get()));
        store.set(9);
        assert_eq!(seen.get(), 9);
    }
}

//! # Persisted Query State
//!
//! [`QueryStates`] presents a typed, always-valid view of a set of URL query
//! fields and lets callers update them.
//!
//! ## Read path
//!
//! Every field is a [`Param`]: a key, a [`Codec`] and a default. Reading looks
//! the key up in the current query, decodes it, and falls back to the default
//! when the key is absent or the value does not decode. Callers never see an
//! invalid or missing value.
//!
//! ## Write path
//!
//! Updates are applied to a copy of the typed state. Only fields whose value
//! actually changed are re-encoded and merged into the navigator's current
//! query; every other key is left exactly as it was (including keys owned by
//! other schemas and malformed values nobody touched). A field set back to
//! its default is removed from the query, and the schema's own keys are
//! emitted after all foreign keys in [`QuerySchema::keys`] order, so one
//! logical state always serializes to the same URL.
//!
//! When the merged query equals the current one, the navigator is not
//! called at all. Otherwise it receives the new location with the instance's
//! [`HistoryMode`].
//!
//! The typed state is updated locally before the navigator is called, so
//! `get()` reflects the last write without a round-trip through the
//! platform.
//!
//! ## Schemas
//!
//! A [`QuerySchema`] binds a state struct to its params. A single [`Param`]
//! is itself a schema whose state is the field's value, which covers the
//! one-key case (`?id=...`). See [`crate::params`] for the lesson and listing
//! schemas.

use crate::codec::{Codec, IndexCodec};
use crate::cursor::Cursor;
use crate::error::Result;
use crate::history::{HistoryMode, Navigator};
use crate::observe::{Listeners, Subscription};
use crate::query::QueryMap;
use std::fmt;

/// A codec bound to a query key and a default value.
#[derive(Debug, Clone)]
pub struct Param<C: Codec> {
    key: String,
    codec: C,
    default: C::Value,
}

impl<C: Codec> Param<C> {
    pub fn new(key: impl Into<String>, codec: C, default: C::Value) -> Self {
        Self {
            key: key.into(),
            codec,
            default,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn default_value(&self) -> &C::Value {
        &self.default
    }

    /// Decodes the field, substituting the default for absent or invalid values.
    pub fn read(&self, query: &QueryMap) -> C::Value {
        let Some(raw) = query.get(&self.key) else {
            return self.default.clone();
        };
        match self.codec.decode(raw) {
            Some(value) => value,
            None => {
                tracing::debug!(key = %self.key, raw, "invalid query value, using default");
                self.default.clone()
            }
        }
    }

    /// Writes `value`, or removes the key when `value` is the default.
    pub fn write(&self, query: &mut QueryMap, value: &C::Value) {
        if *value == self.default {
            query.remove(&self.key);
        } else {
            query.set(&self.key, self.codec.encode(value));
        }
    }

    /// Writes the field only if it changed between `prev` and `next`.
    pub fn write_changed(&self, query: &mut QueryMap, prev: &C::Value, next: &C::Value) {
        if prev != next {
            self.write(query, next);
        }
    }
}

/// A typed state struct bound to a set of query params.
///
/// Implementations must use unique keys and read every field through its
/// [`Param`], so the read path stays total.
pub trait QuerySchema {
    type State: Clone + PartialEq + fmt::Debug;

    fn keys(&self) -> Vec<&str>;

    /// Decodes the full state; never fails.
    fn read(&self, query: &QueryMap) -> Self::State;

    /// Merges the fields that differ between `prev` and `next` into `query`.
    fn write(&self, prev: &Self::State, next: &Self::State, query: &mut QueryMap);

    /// The state of an empty query: every field at its default.
    fn defaults(&self) -> Self::State {
        self.read(&QueryMap::new())
    }
}

impl<C: Codec> QuerySchema for Param<C> {
    type State = C::Value;

    fn keys(&self) -> Vec<&str> {
        vec![self.key()]
    }

    fn read(&self, query: &QueryMap) -> C::Value {
        Param::read(self, query)
    }

    fn write(&self, prev: &C::Value, next: &C::Value, query: &mut QueryMap) {
        self.write_changed(query, prev, next);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    pub history: HistoryMode,
}

impl SyncOptions {
    pub fn replace() -> Self {
        Self {
            history: HistoryMode::Replace,
        }
    }

    pub fn push() -> Self {
        Self {
            history: HistoryMode::Push,
        }
    }
}

/// Typed query state synchronized with a [`Navigator`].
///
/// The navigator is passed to each call rather than owned, so several
/// instances can share one URL while staying otherwise isolated.
pub struct QueryStates<S: QuerySchema> {
    schema: S,
    options: SyncOptions,
    state: S::State,
    listeners: Listeners<S::State>,
}

impl<S: QuerySchema> QueryStates<S> {
    /// Binds `schema` to the navigator's current location.
    pub fn load<N: Navigator>(schema: S, nav: &N, options: SyncOptions) -> Result<Self> {
        let location = nav.current()?;
        let state = schema.read(&location.query);
        tracing::debug!(href = %location, ?state, "query state loaded");
        Ok(Self {
            schema,
            options,
            state,
            listeners: Listeners::new(),
        })
    }

    pub fn get(&self) -> &S::State {
        &self.state
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn options(&self) -> SyncOptions {
        self.options
    }

    /// Applies `update` to a copy of the state and writes what changed.
    /// Returns whether the typed state changed.
    pub fn set<N, F>(&mut self, nav: &mut N, update: F) -> Result<bool>
    where
        N: Navigator,
        F: FnOnce(&mut S::State),
    {
        let mut next = self.state.clone();
        update(&mut next);
        self.replace(nav, next)
    }

    /// Writes a complete new state.
    pub fn replace<N: Navigator>(&mut self, nav: &mut N, next: S::State) -> Result<bool> {
        self.replace_with(nav, next, self.options.history)
    }

    /// Like [`QueryStates::replace`], with an explicit history mode for this
    /// one write.
    pub fn replace_with<N: Navigator>(
        &mut self,
        nav: &mut N,
        next: S::State,
        mode: HistoryMode,
    ) -> Result<bool> {
        if next == self.state {
            return Ok(false);
        }
        let prev = std::mem::replace(&mut self.state, next);
        self.listeners.notify(&self.state);

        let current = nav.current()?;
        let mut query = current.query.clone();
        self.schema.write(&prev, &self.state, &mut query);
        query.move_to_end(&self.schema.keys());
        if query == current.query {
            tracing::trace!(href = %current, "query unchanged, navigation skipped");
            return Ok(true);
        }

        let target = current.with_query(query);
        tracing::debug!(href = %target, %mode, "query state written");
        nav.navigate(target, mode)?;
        Ok(true)
    }

    /// Returns every field to its default (removing their keys).
    pub fn reset<N: Navigator>(&mut self, nav: &mut N) -> Result<bool> {
        let defaults = self.schema.defaults();
        self.replace(nav, defaults)
    }

    /// Re-reads the state after navigation the instance did not perform
    /// (back/forward, deep links, another instance). Returns whether it changed.
    pub fn sync<N: Navigator>(&mut self, nav: &N) -> Result<bool> {
        let location = nav.current()?;
        let next = self.schema.read(&location.query);
        if next == self.state {
            return Ok(false);
        }
        tracing::debug!(href = %location, state = ?next, "query state synced");
        self.state = next;
        self.listeners.notify(&self.state);
        Ok(true)
    }

    pub fn subscribe(&self, callback: impl Fn(&S::State) + 'static) -> Subscription
    where
        S::State: 'static,
    {
        self.listeners.subscribe(callback)
    }
}

impl<S> fmt::Debug for QueryStates<S>
where
    S: QuerySchema + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryStates")
            .field("schema", &self.schema)
            .field("options", &self.options)
            .field("state", &self.state)
            .finish()
    }
}

/// A [`Cursor`] whose position is mirrored in one query key.
///
/// Every step writes the new position through the usual write path, and
/// [`UrlCursor::sync`] re-seats the cursor after outside navigation. Indices
/// read from the URL are clamped to the items, never rejected; a clamped
/// position is written back so the URL names the item actually shown.
///
/// Only steps use the configured history mode. Corrections (clamping on
/// load, on sync and after an item swap) always replace the active entry.
/// While the items are empty the URL index is kept pending and applied once
/// items arrive.
pub struct UrlCursor<T> {
    cursor: Cursor<T>,
    state: QueryStates<Param<IndexCodec>>,
}

impl<T> UrlCursor<T> {
    pub fn load<N: Navigator>(
        items: Vec<T>,
        param: Param<IndexCodec>,
        nav: &mut N,
        options: SyncOptions,
    ) -> Result<Self> {
        let state = QueryStates::load(param, nav, options)?;
        let cursor = Cursor::with_index(items, *state.get());
        let mut url_cursor = Self { cursor, state };
        url_cursor.correct(nav)?;
        Ok(url_cursor)
    }

    pub fn cursor(&self) -> &Cursor<T> {
        &self.cursor
    }

    pub fn current(&self) -> Option<&T> {
        self.cursor.current()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.cursor.current_index()
    }

    pub fn key(&self) -> &str {
        self.state.schema().key()
    }

    pub fn next<N: Navigator>(&mut self, nav: &mut N) -> Result<bool> {
        let moved = self.cursor.next();
        self.step(nav)?;
        Ok(moved)
    }

    pub fn prev<N: Navigator>(&mut self, nav: &mut N) -> Result<bool> {
        let moved = self.cursor.prev();
        self.step(nav)?;
        Ok(moved)
    }

    pub fn reset<N: Navigator>(&mut self, nav: &mut N) -> Result<bool> {
        let moved = self.cursor.reset();
        self.step(nav)?;
        Ok(moved)
    }

    pub fn seek<N: Navigator>(&mut self, nav: &mut N, target: usize) -> Result<bool> {
        let moved = self.cursor.seek(target);
        self.step(nav)?;
        Ok(moved)
    }

    /// Swaps the items. A cursor that was empty picks up the pending URL index.
    pub fn replace_items<N: Navigator>(&mut self, nav: &mut N, items: Vec<T>) -> Result<()> {
        let was_empty = self.cursor.is_empty();
        self.cursor.replace_items(items);
        if was_empty {
            self.cursor.seek(*self.state.get());
        }
        self.correct(nav)
    }

    /// Follows the URL after outside navigation. Returns whether the cursor moved.
    pub fn sync<N: Navigator>(&mut self, nav: &mut N) -> Result<bool> {
        self.state.sync(nav)?;
        let moved = self.cursor.seek(*self.state.get());
        self.correct(nav)?;
        Ok(moved)
    }

    pub fn subscribe(
        &self,
        callback: impl Fn(&crate::cursor::CursorPosition) + 'static,
    ) -> Subscription {
        self.cursor.subscribe(callback)
    }

    fn step<N: Navigator>(&mut self, nav: &mut N) -> Result<()> {
        self.persist(nav, self.state.options().history)
    }

    fn correct<N: Navigator>(&mut self, nav: &mut N) -> Result<()> {
        self.persist(nav, HistoryMode::Replace)
    }

    fn persist<N: Navigator>(&mut self, nav: &mut N, mode: HistoryMode) -> Result<()> {
        let Some(index) = self.cursor.current_index() else {
            return Ok(());
        };
        self.state.replace_with(nav, index, mode)?;
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for UrlCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlCursor")
            .field("key", &self.key())
            .field("cursor", &self.cursor)
            .finish()
    }
}

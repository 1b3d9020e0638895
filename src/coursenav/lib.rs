//! # Coursenav Architecture
//!
//! Coursenav keeps the navigation state of a language-learning app (which
//! level, which day, which lesson, which picture, which page of a listing)
//! in the URL query string, and gives the rest of the program a typed,
//! always-valid view of it. It is a library that happens to have a CLI
//! client, not the other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Command Layer (commands/*.rs)         │
//! │  - show / open / set / day / back / forward / history       │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (codec, query, state, cursor, params, store)          │
//! │  - Typed query state, bounded cursors, scoped stores        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Navigation Layer (history/)                                │
//! │  - Abstract Navigator trait                                 │
//! │  - FileHistory (CLI), MemoryHistory (tests, embedding)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totality
//!
//! Reading state from a URL never fails. A missing key, a malformed value
//! or an out-of-range number all resolve to the field's default, and cursor
//! steps saturate at either end. Only the navigation platform and config
//! files can produce errors ([`error::NavError`]).
//!
//! ## Threading
//!
//! Everything is single-threaded. Listener lists and stores are `Rc`-based
//! and therefore `!Send`; the navigator is passed explicitly to each call
//! that writes.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for UI clients
//! - [`commands`]: Logic behind each CLI command
//! - [`codec`]: Parse/serialize pairs for query values
//! - [`query`]: Ordered query maps and locations
//! - [`state`]: Typed query state synchronized with a navigator
//! - [`cursor`]: Bounded cursor over a finite sequence
//! - [`observe`]: Change listeners and RAII subscriptions
//! - [`params`]: Lesson and listing schemas
//! - [`store`]: Scoped shared-state containers (sidebar, breadcrumbs)
//! - [`history`]: Navigator trait and history implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal output for the binary (not part of the lib API)

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod cursor;
pub mod error;
pub mod history;
pub mod observe;
pub mod params;
pub mod query;
pub mod state;
pub mod store;

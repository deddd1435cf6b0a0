//! # Lists Architecture
//!
//! Listsapp is a **UI-agnostic todo-list library**. The web server in `crates/lists` is one
//! client of it; nothing in here knows about sockets, cookies or HTML.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (crates/lists)                                  │
//! │  - actix-web server, session cookie, minijinja rendering    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads the session, dispatches, saves the session         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Request Layer (router.rs, handler.rs, view.rs)             │
//! │  - Route table, input normalization, outcome → response     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and mutation of the ListStore                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session/)                                   │
//! │  - SessionStore trait, memory and filesystem backends       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Addressing
//!
//! Lists and todos have no identifiers. They are addressed by their current position, so
//! deleting an entry renumbers every entry after it. All lookups go through [`index`].
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: thorough unit tests against a plain `ListStore`.
//! 2. **Handler**: request in, response out, no storage involved.
//! 3. **Session stores**: round trips, with `tempfile` for the filesystem backend.
//! 4. **API**: end-to-end flows in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: entry point for clients
//! - [`commands`]: the list/todo operations
//! - [`config`]: server configuration
//! - [`error`]: error types
//! - [`flash`]: the pending status message
//! - [`handler`]: request → response
//! - [`index`]: positional addressing
//! - [`model`]: `Todo`, `List`, `ListStore`
//! - [`router`]: method + path → route
//! - [`session`]: session storage
//! - [`validation`]: name rules
//! - [`view`]: what a client should render

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod flash;
pub mod handler;
pub mod index;
pub mod model;
pub mod router;
pub mod session;
pub mod validation;
pub mod view;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

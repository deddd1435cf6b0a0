//! # Session Layer
//!
//! All user state lives in a [`Session`]: the user's lists plus the pending status
//! message. Sessions are keyed by a random [`SessionId`] that the client keeps (the HTTP
//! layer puts it in a cookie).
//!
//! ## Lifecycle
//!
//! - **Load**: an unknown id yields a fresh, empty session. There is no "session not
//!   found" error; a client that lost its state simply starts over.
//! - **Save**: the whole session is written back after every request.
//! - **Sweep**: sessions untouched since a cutoff are removed.
//!
//! ## Implementations
//!
//! - [`memory::MemSessionStore`]: a map in process memory. Default; state dies with the
//!   process.
//! - [`fs::FsSessionStore`]: one JSON file per session. Survives restarts.
//!
//! ## Storage Layout (filesystem)
//!
//! ```text
//! <data_dir>/
//! └── session-{uuid}.json
//! ```
//!
//! The serialized form round-trips list and todo order and every field.

use crate::config::ListsConfig;
use crate::error::Result;
use crate::flash::Flash;
use crate::model::ListStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

pub mod fs;
pub mod memory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(SessionId)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub lists: ListStore,
    #[serde(default)]
    pub status: Flash,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            lists: ListStore::new(),
            status: Flash::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// No lists and no pending message: indistinguishable from an unknown session.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty() && self.status.is_empty()
    }
}

/// Abstract interface for session storage.
pub trait SessionStore {
    /// Load a session, or a new empty one if `id` is unknown.
    fn load(&self, id: &SessionId) -> Result<Session>;

    /// Save a session (create or replace).
    fn save(&mut self, id: &SessionId, session: &Session) -> Result<()>;

    /// Forget a session. Removing an unknown id is not an error.
    fn remove(&mut self, id: &SessionId) -> Result<()>;

    /// Remove every session last updated before `cutoff`. Returns how many were removed.
    fn sweep(&mut self, cutoff: DateTime<Utc>) -> Result<usize>;
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn load(&self, id: &SessionId) -> Result<Session> {
        (**self).load(id)
    }

    fn save(&mut self, id: &SessionId, session: &Session) -> Result<()> {
        (**self).save(id, session)
    }

    fn remove(&mut self, id: &SessionId) -> Result<()> {
        (**self).remove(id)
    }

    fn sweep(&mut self, cutoff: DateTime<Utc>) -> Result<usize> {
        (**self).sweep(cutoff)
    }
}

pub type BoxedSessionStore = Box<dyn SessionStore + Send>;

/// Picks the backend for a configuration: the filesystem when a data directory is set,
/// memory otherwise.
pub fn open_store(config: &ListsConfig) -> Result<BoxedSessionStore> {
    match &config.data_dir {
        Some(dir) => Ok(Box::new(fs::FsSessionStore::open(dir)?)),
        None => Ok(Box::new(memory::MemSessionStore::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flash::StatusMessage;
    use crate::model::List;

    #[test]
    fn empty_until_it_holds_lists_or_a_message() {
        let mut session = Session::new();
        assert!(session.is_empty());

        session.status.set(StatusMessage::success("The list has been deleted."));
        assert!(!session.is_empty());

        session.status.take();
        session.lists.lists.push(List::new("Work"));
        assert!(!session.is_empty());
    }

    #[test]
    fn session_id_round_trips_through_text() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }

    #[test]
    fn session_round_trips_through_json() {
        let mut session = Session::new();
        session.lists.lists.push(List::new("Work"));
        session.status.set(StatusMessage::success("The list has been created."));

        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn open_store_defaults_to_memory() {
        let config = ListsConfig::default();
        let store = open_store(&config).unwrap();
        let session = store.load(&SessionId::new()).unwrap();
        assert!(session.lists.is_empty());
    }

    #[test]
    fn open_store_uses_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = ListsConfig {
            data_dir: Some(dir.path().join("sessions")),
            ..Default::default()
        };
        let mut store = open_store(&config).unwrap();
        let id = SessionId::new();
        store.save(&id, &Session::new()).unwrap();

        assert!(dir
            .path()
            .join("sessions")
            .join(format!("session-{}.json", id))
            .exists());
    }
}

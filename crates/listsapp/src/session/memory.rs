use super::{Session, SessionId, SessionStore};
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Sessions kept in process memory.
#[derive(Debug, Default)]
pub struct MemSessionStore {
    sessions: HashMap<SessionId, Session>,
}

impl MemSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for MemSessionStore {
    fn load(&self, id: &SessionId) -> Result<Session> {
        Ok(self.sessions.get(id).cloned().unwrap_or_default())
    }

    fn save(&mut self, id: &SessionId, session: &Session) -> Result<()> {
        self.sessions.insert(*id, session.clone());
        Ok(())
    }

    fn remove(&mut self, id: &SessionId) -> Result<()> {
        self.sessions.remove(id);
        Ok(())
    }

    fn sweep(&mut self, cutoff: DateTime<Utc>) -> Result<usize> {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| session.updated_at >= cutoff);
        Ok(before - self.sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::List;
    use chrono::Duration;

    #[test]
    fn unknown_id_loads_empty_session() {
        let store = MemSessionStore::new();
        let session = store.load(&SessionId::new()).unwrap();
        assert!(session.lists.is_empty());
        assert!(session.status.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn save_then_load() {
        let mut store = MemSessionStore::new();
        let id = SessionId::new();
        let mut session = Session::new();
        session.lists.lists.push(List::new("Work"));

        store.save(&id, &session).unwrap();
        assert_eq!(store.load(&id).unwrap(), session);

        // Other ids are unaffected
        assert!(store.load(&SessionId::new()).unwrap().lists.is_empty());
    }

    #[test]
    fn remove_forgets_session() {
        let mut store = MemSessionStore::new();
        let id = SessionId::new();
        store.save(&id, &Session::new()).unwrap();
        store.remove(&id).unwrap();
        store.remove(&id).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn sweep_drops_stale_sessions() {
        let mut store = MemSessionStore::new();
        let stale_id = SessionId::new();
        let fresh_id = SessionId::new();

        let mut stale = Session::new();
        stale.updated_at = Utc::now() - Duration::days(30);
        store.save(&stale_id, &stale).unwrap();
        store.save(&fresh_id, &Session::new()).unwrap();

        let removed = store.sweep(Utc::now() - Duration::days(1)).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
    }
}

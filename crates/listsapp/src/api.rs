//! # API Facade
//!
//! The single entry point for UIs. A UI hands over a session id and a [`Request`] and gets
//! back a [`Response`]; it never touches sessions or lists directly.
//!
//! ## Request Lifecycle
//!
//! 1. Load the session for the id (an unknown id yields a fresh, empty session)
//! 2. Dispatch the request against it ([`crate::handler::dispatch`])
//! 3. Touch and save the session, including any status message left pending
//!
//! A session is saved even when the response is a not-found page, because rendering
//! consumed the pending message. A session left empty (no lists, no pending message) is
//! removed instead, since loading an unknown id gives the same empty session. Visitors
//! that never create anything therefore leave nothing behind.
//!
//! ## Generic Over SessionStore
//!
//! `ListsApi<S: SessionStore>` works with any backend:
//! - Production: `ListsApi<BoxedSessionStore>` chosen by [`crate::session::open_store`]
//! - Testing: `ListsApi<MemSessionStore>`
//!
//! The API is not synchronized. Servers that handle requests concurrently must serialize
//! calls (for example behind a mutex) so two requests for one session never interleave
//! their load and save.

use crate::error::Result;
use crate::handler::{self, Request};
use crate::session::{SessionId, SessionStore};
use crate::view::Response;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

pub struct ListsApi<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> ListsApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Runs one request for the session `id`.
    pub fn handle(&mut self, id: &SessionId, request: &Request) -> Result<Response> {
        let mut session = self.store.load(id)?;
        let response = handler::dispatch(&mut session, request)?;
        if session.is_empty() {
            self.store.remove(id)?;
        } else {
            session.touch();
            self.store.save(id, &session)?;
        }
        debug!(session = %id, redirect = response.is_redirect(), "handled");
        Ok(response)
    }

    /// Discards a session entirely.
    pub fn forget(&mut self, id: &SessionId) -> Result<()> {
        self.store.remove(id)
    }

    /// Removes sessions idle for longer than `ttl`.
    pub fn sweep_sessions(&mut self, ttl: chrono::Duration) -> Result<usize> {
        let cutoff = Utc::now()
            .checked_sub_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let removed = self.store.sweep(cutoff)?;
        info!(removed, %cutoff, "swept idle sessions");
        Ok(removed)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flash::StatusMessage;
    use crate::router::Method;
    use crate::session::memory::MemSessionStore;
    use crate::session::Session;
    use crate::view::{PageStatus, View};
    use chrono::Duration;

    fn api() -> ListsApi<MemSessionStore> {
        ListsApi::new(MemSessionStore::new())
    }

    #[test]
    fn handle_persists_mutations() {
        let mut api = api();
        let id = SessionId::new();

        let response = api
            .handle(&id, &Request::post("/lists", [("list_name", "Work")]))
            .unwrap();
        assert_eq!(response, Response::redirect("/lists"));

        let session = api.store().load(&id).unwrap();
        assert_eq!(session.lists.names().collect::<Vec<_>>(), vec!["Work"]);
        assert_eq!(
            session.status.peek(),
            Some(&StatusMessage::success("The list has been created."))
        );
    }

    #[test]
    fn sessions_are_isolated() {
        let mut api = api();
        let alice = SessionId::new();
        let bob = SessionId::new();

        api.handle(&alice, &Request::post("/lists", [("list_name", "Work")]))
            .unwrap();

        match api.handle(&bob, &Request::get("/lists")).unwrap() {
            Response::Render {
                view: View::Lists { lists },
                status,
                ..
            } => {
                assert!(lists.is_empty());
                assert_eq!(status, None);
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn not_found_still_saves_consumed_status() {
        let mut api = api();
        let id = SessionId::new();
        api.handle(&id, &Request::post("/lists", [("list_name", "Work")]))
            .unwrap();

        let response = api.handle(&id, &Request::get("/lists/7")).unwrap();
        assert!(matches!(
            response,
            Response::Render {
                view: View::NotFound,
                page_status: PageStatus::NotFound,
                ..
            }
        ));
        assert!(api.store().load(&id).unwrap().status.is_empty());
    }

    #[test]
    fn empty_sessions_are_not_kept() {
        let mut api = api();
        for path in ["/lists", "/nope", "/lists/3", "/"] {
            api.handle(&SessionId::new(), &Request::get(path)).unwrap();
        }
        assert!(api.store().is_empty());
    }

    #[test]
    fn emptied_session_does_not_replay_its_message() {
        let mut api = api();
        let id = SessionId::new();
        api.handle(&id, &Request::post("/lists", [("list_name", "Work")]))
            .unwrap();
        api.handle(&id, &Request::new(Method::Post, "/lists/0/destroy"))
            .unwrap();
        // Pending "deleted" message keeps the session alive
        assert_eq!(api.store().len(), 1);

        match api.handle(&id, &Request::get("/lists")).unwrap() {
            Response::Render { status, .. } => {
                assert_eq!(
                    status,
                    Some(StatusMessage::success("The list has been deleted."))
                );
            }
            other => panic!("unexpected response {:?}", other),
        }
        assert!(api.store().is_empty());

        match api.handle(&id, &Request::get("/lists")).unwrap() {
            Response::Render { status, .. } => assert_eq!(status, None),
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn forget_drops_the_session() {
        let mut api = api();
        let id = SessionId::new();
        api.handle(&id, &Request::post("/lists", [("list_name", "Work")]))
            .unwrap();

        api.forget(&id).unwrap();
        assert!(api.store().load(&id).unwrap().lists.is_empty());
    }

    #[test]
    fn sweep_removes_only_idle_sessions() {
        let mut api = api();
        let idle = SessionId::new();
        let active = SessionId::new();

        let mut old = Session::new();
        old.updated_at = Utc::now() - Duration::days(30);
        api.store_mut().save(&idle, &old).unwrap();
        api.handle(&active, &Request::post("/lists", [("list_name", "Work")]))
            .unwrap();

        assert_eq!(api.sweep_sessions(Duration::days(14)).unwrap(), 1);
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn sweep_with_unbounded_ttl_keeps_everything() {
        let mut api = api();
        api.handle(
            &SessionId::new(),
            &Request::post("/lists", [("list_name", "Work")]),
        )
        .unwrap();
        assert_eq!(api.sweep_sessions(Duration::MAX).unwrap(), 0);
        assert_eq!(api.store().len(), 1);
    }
}

//! # Request Handling
//!
//! Turns one [`Request`] into one [`Response`] by running at most one command against the
//! session's lists.
//!
//! ## Input Normalization
//!
//! - `list_name` and `todo` are trimmed before validation. A missing field is empty.
//! - `completed` is true only when it is exactly `"true"`. Anything else, including a
//!   missing field, means false.
//!
//! ## Outcomes
//!
//! | Outcome | Response | Status message |
//! |---------|----------|----------------|
//! | Success | redirect to `/lists` or `/lists/:id` | success text, left pending for the next page |
//! | Invalid input | re-render the form the input came from | error text, shown on this page |
//! | Stale or unknown index, unknown route | render the not-found page (404) | error text, shown on this page |
//!
//! Every render takes the pending message out of the session, so a message is shown once.
//!
//! ## Stale Indexes
//!
//! Indexes come from pages that may be out of date (a list deleted in another tab shifts
//! every later list). A request that no longer addresses anything is answered with the
//! not-found page; it is never a fault.

use crate::commands::{self, CmdResult};
use crate::error::{ListsError, Result};
use crate::flash::StatusMessage;
use crate::index::{DisplayList, ListIndex};
use crate::router::{list_path, lists_path, Method, Route};
use crate::session::Session;
use crate::view::{PageStatus, Response, View};
use std::collections::HashMap;
use tracing::{debug, warn};

pub const PAGE_NOT_FOUND: &str = "The requested page was not found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub form: HashMap<String, String>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            form: HashMap::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post<K, V>(path: impl Into<String>, form: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut request = Self::new(Method::Post, path);
        request.form = form
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        request
    }

    /// A free-text field with surrounding whitespace removed.
    pub fn text(&self, name: &str) -> &str {
        self.form.get(name).map(|v| v.trim()).unwrap_or_default()
    }

    /// A boolean field: only the literal `"true"` counts.
    pub fn flag(&self, name: &str) -> bool {
        self.form.get(name).is_some_and(|v| v == "true")
    }
}

/// Handles a request against `session`, mutating its lists and status message.
///
/// Only storage-level failures are returned as errors. Validation and not-found outcomes
/// are responses.
pub fn dispatch(session: &mut Session, request: &Request) -> Result<Response> {
    let Some(route) = Route::parse(request.method, &request.path) else {
        warn!(method = ?request.method, path = %request.path, "no route");
        return Ok(not_found(session, StatusMessage::error(PAGE_NOT_FOUND)));
    };
    debug!(?route, "dispatching");

    match handle(session, route, request) {
        Err(ListsError::NotFound(missing)) => {
            warn!(?route, %missing, "stale index");
            Ok(not_found(session, StatusMessage::error(missing.to_string())))
        }
        other => other,
    }
}

fn handle(session: &mut Session, route: Route, request: &Request) -> Result<Response> {
    match route {
        Route::Home => Ok(Response::redirect(lists_path())),

        Route::Lists => {
            let lists = commands::get::all(&session.lists)?.listed_lists;
            Ok(render(session, View::Lists { lists }))
        }

        Route::NewList => Ok(render(
            session,
            View::NewList {
                list_name: String::new(),
            },
        )),

        Route::CreateList => {
            let name = request.text("list_name");
            let outcome = commands::create::run(&mut session.lists, name);
            after_mutation(session, outcome, lists_path(), |_| {
                Ok(View::NewList {
                    list_name: name.to_string(),
                })
            })
        }

        Route::ShowList(index) => {
            let list = display_list(session, index)?;
            Ok(render(
                session,
                View::List {
                    list,
                    todo: String::new(),
                },
            ))
        }

        Route::EditList(index) => {
            let list = display_list(session, index)?;
            let list_name = list.name.clone();
            Ok(render(session, View::EditList { list, list_name }))
        }

        Route::UpdateList(index) => {
            let name = request.text("list_name");
            let outcome = commands::rename::run(&mut session.lists, index, name);
            after_mutation(session, outcome, list_path(index), |session| {
                Ok(View::EditList {
                    list: display_list(session, index)?,
                    list_name: name.to_string(),
                })
            })
        }

        Route::DestroyList(index) => {
            let outcome = commands::delete::run(&mut session.lists, index);
            redirect_after(session, outcome, lists_path())
        }

        Route::AddTodo(index) => {
            let text = request.text("todo");
            let outcome = commands::add_todo::run(&mut session.lists, index, text);
            after_mutation(session, outcome, list_path(index), |session| {
                Ok(View::List {
                    list: display_list(session, index)?,
                    todo: text.to_string(),
                })
            })
        }

        Route::DestroyTodo(list, todo) => {
            let outcome = commands::delete_todo::run(&mut session.lists, list, todo);
            redirect_after(session, outcome, list_path(list))
        }

        Route::UpdateTodo(list, todo) => {
            let completed = request.flag("completed");
            let outcome =
                commands::completion::set_completed(&mut session.lists, list, todo, completed);
            redirect_after(session, outcome, list_path(list))
        }

        Route::CompleteAll(list) => {
            let outcome = commands::completion::complete_all(&mut session.lists, list);
            redirect_after(session, outcome, list_path(list))
        }
    }
}

/// Success redirects to `location`; invalid input re-renders the view built by `form`.
fn after_mutation(
    session: &mut Session,
    outcome: Result<CmdResult>,
    location: String,
    form: impl FnOnce(&Session) -> Result<View>,
) -> Result<Response> {
    match outcome {
        Err(ListsError::Validation(invalid)) => {
            debug!(%invalid, "rejected input");
            session.status.set(StatusMessage::error(invalid.to_string()));
            let view = form(session)?;
            Ok(render(session, view))
        }
        other => redirect_after(session, other, location),
    }
}

fn redirect_after(
    session: &mut Session,
    outcome: Result<CmdResult>,
    location: String,
) -> Result<Response> {
    let result = outcome?;
    if let Some(status) = result.status() {
        session.status.set(status.clone());
    }
    Ok(Response::redirect(location))
}

fn display_list(session: &Session, index: ListIndex) -> Result<DisplayList> {
    let mut listed = commands::get::one(&session.lists, index)?.listed_lists;
    listed
        .pop()
        .ok_or_else(|| ListsError::Store(format!("list {} vanished during lookup", index)))
}

fn render(session: &mut Session, view: View) -> Response {
    Response::Render {
        view,
        status: session.status.take(),
        page_status: PageStatus::Ok,
    }
}

fn not_found(session: &mut Session, message: StatusMessage) -> Response {
    session.status.set(message);
    Response::Render {
        view: View::NotFound,
        status: session.status.take(),
        page_status: PageStatus::NotFound,
    }
}

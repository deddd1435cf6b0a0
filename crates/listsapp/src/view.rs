//! What a client should show after a request.
//!
//! Views carry data only. The HTTP layer turns them into pages; each variant maps to one
//! template named by [`View::template_name`].

use crate::flash::StatusMessage;
use crate::index::DisplayList;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// All lists.
    Lists { lists: Vec<DisplayList> },
    /// The new-list form, pre-filled with a rejected name when re-rendered.
    NewList { list_name: String },
    /// One list with its todos and the add-todo form.
    List { list: DisplayList, todo: String },
    /// The rename form for one list.
    EditList { list: DisplayList, list_name: String },
    /// Nothing lives at the requested address.
    NotFound,
}

impl View {
    pub fn template_name(&self) -> &'static str {
        match self {
            View::Lists { .. } => "lists.html",
            View::NewList { .. } => "new_list.html",
            View::List { .. } => "list.html",
            View::EditList { .. } => "edit_list.html",
            View::NotFound => "not_found.html",
        }
    }
}

/// Status code class of a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Ok,
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Render `view` now. `status` is the message taken from the session for this page.
    Render {
        view: View,
        status: Option<StatusMessage>,
        page_status: PageStatus,
    },
    /// Send the client to `location`. Any status message stays pending in the session.
    Redirect { location: String },
}

impl Response {
    pub fn redirect(location: impl Into<String>) -> Self {
        Response::Redirect {
            location: location.into(),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Response::Redirect { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_serialize_with_tag() {
        let view = View::NewList {
            list_name: "Work".into(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["view"], "new_list");
        assert_eq!(json["list_name"], "Work");
    }

    #[test]
    fn template_names() {
        assert_eq!(View::NotFound.template_name(), "not_found.html");
        assert_eq!(
            View::Lists { lists: vec![] }.template_name(),
            "lists.html"
        );
    }
}

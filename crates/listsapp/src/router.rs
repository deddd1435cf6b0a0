//! # Routes
//!
//! The request surface, as a plain enum. [`Route::parse`] maps an HTTP method and path to
//! a route; it knows nothing about any web framework.
//!
//! | Method | Path | Route |
//! |--------|------|-------|
//! | GET  | `/` | [`Route::Home`] |
//! | GET  | `/lists` | [`Route::Lists`] |
//! | GET  | `/lists/new` | [`Route::NewList`] |
//! | POST | `/lists` | [`Route::CreateList`] |
//! | GET  | `/lists/:id` | [`Route::ShowList`] |
//! | GET  | `/lists/:id/edit` | [`Route::EditList`] |
//! | POST | `/lists/:id` | [`Route::UpdateList`] |
//! | POST | `/lists/:id/destroy` | [`Route::DestroyList`] |
//! | POST | `/lists/:list_id/todos` | [`Route::AddTodo`] |
//! | POST | `/lists/:list_id/todos/:todo_id/destroy` | [`Route::DestroyTodo`] |
//! | POST | `/lists/:list_id/todos/:todo_id` | [`Route::UpdateTodo`] |
//! | POST | `/lists/:list_id/complete_all` | [`Route::CompleteAll`] |
//!
//! Ids must be non-negative integers. Anything else, including `/lists/abc`, does not
//! match. The query string is ignored and trailing slashes are not.

use crate::index::{ListIndex, TodoIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Case-insensitive. Only GET and POST are served.
    pub fn parse(method: &str) -> Option<Self> {
        if method.eq_ignore_ascii_case("GET") {
            Some(Method::Get)
        } else if method.eq_ignore_ascii_case("POST") {
            Some(Method::Post)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Lists,
    NewList,
    CreateList,
    ShowList(ListIndex),
    EditList(ListIndex),
    UpdateList(ListIndex),
    DestroyList(ListIndex),
    AddTodo(ListIndex),
    DestroyTodo(ListIndex, TodoIndex),
    UpdateTodo(ListIndex, TodoIndex),
    CompleteAll(ListIndex),
}

impl Route {
    pub fn parse(method: Method, path: &str) -> Option<Self> {
        let path = path.split('?').next().unwrap_or_default();
        let segments: Vec<&str> = match path.strip_prefix('/') {
            Some("") => Vec::new(),
            Some(rest) => rest.split('/').collect(),
            None => return None,
        };

        use Method::{Get, Post};
        match (method, segments.as_slice()) {
            (Get, []) => Some(Route::Home),
            (Get, ["lists"]) => Some(Route::Lists),
            (Post, ["lists"]) => Some(Route::CreateList),
            (Get, ["lists", "new"]) => Some(Route::NewList),
            (Get, ["lists", id]) => Some(Route::ShowList(id.parse().ok()?)),
            (Post, ["lists", id]) => Some(Route::UpdateList(id.parse().ok()?)),
            (Get, ["lists", id, "edit"]) => Some(Route::EditList(id.parse().ok()?)),
            (Post, ["lists", id, "destroy"]) => Some(Route::DestroyList(id.parse().ok()?)),
            (Post, ["lists", id, "todos"]) => Some(Route::AddTodo(id.parse().ok()?)),
            (Post, ["lists", id, "complete_all"]) => Some(Route::CompleteAll(id.parse().ok()?)),
            (Post, ["lists", list_id, "todos", todo_id]) => Some(Route::UpdateTodo(
                list_id.parse().ok()?,
                todo_id.parse().ok()?,
            )),
            (Post, ["lists", list_id, "todos", todo_id, "destroy"]) => Some(Route::DestroyTodo(
                list_id.parse().ok()?,
                todo_id.parse().ok()?,
            )),
            _ => None,
        }
    }

    /// The list this route addresses, if any.
    pub fn list_index(&self) -> Option<ListIndex> {
        match self {
            Route::Home | Route::Lists | Route::NewList | Route::CreateList => None,
            Route::ShowList(i)
            | Route::EditList(i)
            | Route::UpdateList(i)
            | Route::DestroyList(i)
            | Route::AddTodo(i)
            | Route::DestroyTodo(i, _)
            | Route::UpdateTodo(i, _)
            | Route::CompleteAll(i) => Some(*i),
        }
    }
}

/// Canonical URL of the lists overview.
pub fn lists_path() -> String {
    "/lists".to_string()
}

/// Canonical URL of a single list.
pub fn list_path(index: ListIndex) -> String {
    format!("/lists/{}", index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Method::{Get, Post};

    fn l(i: usize) -> ListIndex {
        ListIndex(i)
    }

    fn t(i: usize) -> TodoIndex {
        TodoIndex(i)
    }

    #[test]
    fn test_method_parse() {
        assert_eq!(Method::parse("GET"), Some(Get));
        assert_eq!(Method::parse("post"), Some(Post));
        assert_eq!(Method::parse("DELETE"), None);
    }

    #[test]
    fn test_route_table() {
        let cases = [
            (Get, "/", Route::Home),
            (Get, "/lists", Route::Lists),
            (Get, "/lists/new", Route::NewList),
            (Post, "/lists", Route::CreateList),
            (Get, "/lists/3", Route::ShowList(l(3))),
            (Get, "/lists/3/edit", Route::EditList(l(3))),
            (Post, "/lists/3", Route::UpdateList(l(3))),
            (Post, "/lists/3/destroy", Route::DestroyList(l(3))),
            (Post, "/lists/3/todos", Route::AddTodo(l(3))),
            (Post, "/lists/3/todos/1/destroy", Route::DestroyTodo(l(3), t(1))),
            (Post, "/lists/3/todos/1", Route::UpdateTodo(l(3), t(1))),
            (Post, "/lists/3/complete_all", Route::CompleteAll(l(3))),
        ];
        for (method, path, expected) in cases {
            assert_eq!(Route::parse(method, path), Some(expected), "{:?} {}", method, path);
        }
    }

    #[test]
    fn test_wrong_method_does_not_match() {
        assert_eq!(Route::parse(Get, "/lists/3/destroy"), None);
        assert_eq!(Route::parse(Get, "/lists/3/todos"), None);
        assert_eq!(Route::parse(Post, "/"), None);
        assert_eq!(Route::parse(Post, "/lists/new"), None);
        assert_eq!(Route::parse(Post, "/lists/0/edit"), None);
    }

    #[test]
    fn test_non_numeric_ids_do_not_match() {
        assert_eq!(Route::parse(Get, "/lists/abc"), None);
        assert_eq!(Route::parse(Get, "/lists/-1"), None);
        assert_eq!(Route::parse(Post, "/lists/0/todos/x"), None);
        assert_eq!(Route::parse(Post, "/lists/x/todos/0/destroy"), None);
    }

    #[test]
    fn test_query_string_is_ignored() {
        assert_eq!(Route::parse(Get, "/lists?page=2"), Some(Route::Lists));
        assert_eq!(Route::parse(Get, "/?x"), Some(Route::Home));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::parse(Get, ""), None);
        assert_eq!(Route::parse(Get, "lists"), None);
        assert_eq!(Route::parse(Get, "/lists/"), None);
        assert_eq!(Route::parse(Get, "/todos"), None);
        assert_eq!(Route::parse(Get, "/lists/1/todos/2/3"), None);
    }

    #[test]
    fn test_list_index() {
        assert_eq!(Route::Lists.list_index(), None);
        assert_eq!(Route::DestroyTodo(l(2), t(0)).list_index(), Some(l(2)));
    }

    #[test]
    fn test_paths() {
        assert_eq!(lists_path(), "/lists");
        assert_eq!(list_path(l(4)), "/lists/4");
    }
}

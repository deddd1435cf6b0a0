//! # Domain Model
//!
//! Three plain data types: a [`ListStore`] holds [`List`]s, a `List` holds [`Todo`]s.
//!
//! ## Ordering Is Identity
//!
//! Neither lists nor todos carry an id. A list *is* "the list at position 2", so the
//! order of both sequences is significant and must survive serialization untouched.
//! Removing an entry shifts every later entry down by one. See [`crate::index`].
//!
//! ## Name Limits
//!
//! | Entity | Min | Max | Unique |
//! |--------|-----|-----|--------|
//! | List   | 1   | 50  | yes, exact case-sensitive match |
//! | Todo   | 1   | 100 | no |
//!
//! Lengths count characters, not bytes. The rules themselves live in [`crate::validation`].

use serde::{Deserialize, Serialize};

pub const LIST_NAME_MIN: usize = 1;
pub const LIST_NAME_MAX: usize = 50;
pub const TODO_NAME_MIN: usize = 1;
pub const TODO_NAME_MAX: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub name: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl List {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            todos: Vec::new(),
        }
    }

    pub fn todos_count(&self) -> usize {
        self.todos.len()
    }

    pub fn todos_remaining_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    /// A list is complete once it has todos and every one of them is done.
    /// An empty list is never complete.
    pub fn is_complete(&self) -> bool {
        self.todos_count() > 0 && self.todos_remaining_count() == 0
    }
}

/// All lists of one session, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStore {
    #[serde(default)]
    pub lists: Vec<List>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lists.iter().map(|list| list.name.as_str())
    }
}

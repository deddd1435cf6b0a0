//! # Positional Addressing
//!
//! Lists and todos are referenced by where they currently sit: `/lists/2` is the third
//! list, `/lists/2/todos/0` the first todo in it. There is no stable identifier, so a
//! deletion renumbers everything after it:
//!
//! ```text
//! before delete(1):  0:Work  1:Home  2:Trip
//! after  delete(1):  0:Work  1:Trip
//! ```
//!
//! A request built from a page rendered before the deletion (another tab, a back button)
//! may therefore point at a different entry, or at nothing. The latter surfaces as
//! [`NotFound`], which the handler turns into a not-found page.
//!
//! ## Implementation
//!
//! - [`ListIndex`] / [`TodoIndex`]: typed positions, parsed from path segments
//! - [`list`], [`list_mut`], [`todo_mut`]: the only index → entity lookups
//! - [`index_lists`]: pairs every list and todo with its current position for display
//!
//! **Developer Note**: command code must go through the lookups here rather than indexing
//! `store.lists` directly. Swapping positions for generation-checked handles later should
//! only touch this module.

use crate::error::NotFound;
use crate::model::{List, ListStore, Todo};
use serde::Serialize;
use std::str::FromStr;

/// Position of a list in its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ListIndex(pub usize);

/// Position of a todo in its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TodoIndex(pub usize);

impl std::fmt::Display for ListIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for TodoIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_position(s).map(ListIndex)
    }
}

impl FromStr for TodoIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_position(s).map(TodoIndex)
    }
}

/// Parses a non-negative decimal integer. Signs, whitespace and empty input are rejected.
fn parse_position(s: &str) -> Result<usize, String> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Invalid index: {:?}", s));
    }
    s.parse::<usize>()
        .map_err(|_| format!("Index out of range: {}", s))
}

pub fn list(store: &ListStore, index: ListIndex) -> Result<&List, NotFound> {
    store.lists.get(index.0).ok_or(NotFound::List(index))
}

pub fn list_mut(store: &mut ListStore, index: ListIndex) -> Result<&mut List, NotFound> {
    store.lists.get_mut(index.0).ok_or(NotFound::List(index))
}

pub fn todo_mut(
    store: &mut ListStore,
    list_index: ListIndex,
    todo_index: TodoIndex,
) -> Result<&mut Todo, NotFound> {
    list_mut(store, list_index)?
        .todos
        .get_mut(todo_index.0)
        .ok_or(NotFound::Todo(list_index, todo_index))
}

/// Checks that `index` addresses a list, without borrowing it.
pub fn ensure_list(store: &ListStore, index: ListIndex) -> Result<(), NotFound> {
    list(store, index).map(|_| ())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayTodo {
    pub index: TodoIndex,
    pub name: String,
    pub completed: bool,
}

/// A list together with the position it currently has, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayList {
    pub index: ListIndex,
    pub name: String,
    pub todos: Vec<DisplayTodo>,
    pub todos_count: usize,
    pub todos_remaining_count: usize,
    pub is_complete: bool,
}

impl DisplayList {
    pub fn new(index: ListIndex, list: &List) -> Self {
        let todos = list
            .todos
            .iter()
            .enumerate()
            .map(|(i, todo)| DisplayTodo {
                index: TodoIndex(i),
                name: todo.name.clone(),
                completed: todo.completed,
            })
            .collect();

        Self {
            index,
            name: list.name.clone(),
            todos,
            todos_count: list.todos_count(),
            todos_remaining_count: list.todos_remaining_count(),
            is_complete: list.is_complete(),
        }
    }
}

/// Assigns every list its current position. The result is in store order.
pub fn index_lists(store: &ListStore) -> Vec<DisplayList> {
    store
        .lists
        .iter()
        .enumerate()
        .map(|(i, list)| DisplayList::new(ListIndex(i), list))
        .collect()
}

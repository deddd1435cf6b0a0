use crate::commands::{success, CmdResult};
use crate::error::Result;
use crate::index::{self, ListIndex};
use crate::model::{ListStore, Todo};
use crate::validation::validate_todo_name;
use tracing::debug;

pub const ADDED: &str = "The todo was added!";

/// Appends an uncompleted todo to the list at `list_index`. `text` must already be trimmed.
pub fn run(store: &mut ListStore, list_index: ListIndex, text: &str) -> Result<CmdResult> {
    let list = index::list_mut(store, list_index)?;
    validate_todo_name(text)?;

    list.todos.push(Todo::new(text));
    debug!(list = %list_index, todo = list.todos.len() - 1, "todo added");

    Ok(success(ADDED))
}

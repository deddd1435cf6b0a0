use crate::commands::{success, CmdResult};
use crate::error::Result;
use crate::index::{self, ListIndex, TodoIndex};
use crate::model::ListStore;
use tracing::debug;

pub const UPDATED: &str = "The todo has been updated!";
pub const ALL_COMPLETED: &str = "All todos have been completed!";

/// Sets a todo's completed flag to exactly `completed`.
///
/// This is not a toggle: the caller supplies the target state, so repeating the call
/// is harmless.
pub fn set_completed(
    store: &mut ListStore,
    list_index: ListIndex,
    todo_index: TodoIndex,
    completed: bool,
) -> Result<CmdResult> {
    let todo = index::todo_mut(store, list_index, todo_index)?;
    todo.completed = completed;
    debug!(list = %list_index, todo = %todo_index, completed, "todo updated");

    Ok(success(UPDATED))
}

/// Marks every todo in the list as completed. Order and count are unchanged.
pub fn complete_all(store: &mut ListStore, list_index: ListIndex) -> Result<CmdResult> {
    let list = index::list_mut(store, list_index)?;
    for todo in list.todos.iter_mut() {
        todo.completed = true;
    }
    debug!(list = %list_index, todos = list.todos.len(), "list completed");

    Ok(success(ALL_COMPLETED))
}

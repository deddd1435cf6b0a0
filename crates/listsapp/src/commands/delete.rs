use crate::commands::{success, CmdResult};
use crate::error::Result;
use crate::index::{self, ListIndex};
use crate::model::ListStore;
use tracing::debug;

pub const DELETED: &str = "The list has been deleted.";

/// Removes the list at `index`. Every later list moves down one position.
pub fn run(store: &mut ListStore, index: ListIndex) -> Result<CmdResult> {
    index::ensure_list(store, index)?;

    let removed = store.lists.remove(index.0);
    debug!(%index, name = %removed.name, todos = removed.todos.len(), "list deleted");

    Ok(success(DELETED))
}

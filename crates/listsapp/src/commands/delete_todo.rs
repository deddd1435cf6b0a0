use crate::commands::{success, CmdResult};
use crate::error::{NotFound, Result};
use crate::index::{self, ListIndex, TodoIndex};
use crate::model::ListStore;
use tracing::debug;

pub const DELETED: &str = "The todo has been deleted!";

/// Removes one todo. Later todos in the same list move down one position.
pub fn run(
    store: &mut ListStore,
    list_index: ListIndex,
    todo_index: TodoIndex,
) -> Result<CmdResult> {
    let list = index::list_mut(store, list_index)?;
    if todo_index.0 >= list.todos.len() {
        return Err(NotFound::Todo(list_index, todo_index).into());
    }

    let removed = list.todos.remove(todo_index.0);
    debug!(list = %list_index, todo = %todo_index, name = %removed.name, "todo deleted");

    Ok(success(DELETED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListsError;
    use crate::flash::StatusMessage;
    use crate::test_utils::StoreFixture;

    #[test]
    fn removes_and_shifts() {
        let mut store = StoreFixture::new()
            .with_list("Groceries", &["Milk", "Eggs", "Bread"])
            .store;
        let result = run(&mut store, ListIndex(0), TodoIndex(0)).unwrap();

        let names: Vec<_> = store.lists[0].todos.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Eggs", "Bread"]);
        assert_eq!(result.status(), Some(&StatusMessage::success(DELETED)));
    }

    #[test]
    fn missing_todo_is_not_found() {
        let mut store = StoreFixture::new().with_list("Groceries", &["Milk"]).store;
        let err = run(&mut store, ListIndex(0), TodoIndex(1)).unwrap_err();

        assert!(matches!(
            err,
            ListsError::NotFound(NotFound::Todo(ListIndex(0), TodoIndex(1)))
        ));
        assert_eq!(err.to_string(), "The specified todo was not found.");
        assert_eq!(store.lists[0].todos.len(), 1);
    }

    #[test]
    fn missing_list_is_not_found() {
        let mut store = StoreFixture::new().store;
        assert!(matches!(
            run(&mut store, ListIndex(0), TodoIndex(0)),
            Err(ListsError::NotFound(NotFound::List(ListIndex(0))))
        ));
    }
}

use crate::model::{List, ListStore, Todo};

/// Builder for stores used in tests.
pub struct StoreFixture {
    pub store: ListStore,
}

impl Default for StoreFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreFixture {
    pub fn new() -> Self {
        Self {
            store: ListStore::new(),
        }
    }

    /// Adds empty lists with the given names.
    pub fn with_lists(mut self, names: &[&str]) -> Self {
        for name in names {
            self.store.lists.push(List::new(*name));
        }
        self
    }

    /// Adds one list holding uncompleted todos.
    pub fn with_list(mut self, name: &str, todos: &[&str]) -> Self {
        let mut list = List::new(name);
        list.todos = todos.iter().map(|t| Todo::new(*t)).collect();
        self.store.lists.push(list);
        self
    }
}

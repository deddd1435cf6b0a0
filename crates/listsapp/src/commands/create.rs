use crate::commands::{success, CmdResult};
use crate::error::Result;
use crate::model::{List, ListStore};
use crate::validation::validate_list_name;
use tracing::debug;

pub const CREATED: &str = "The list has been created.";

/// Appends a new, empty list. `name` must already be trimmed.
pub fn run(store: &mut ListStore, name: &str) -> Result<CmdResult> {
    validate_list_name(name, &store.lists)?;

    store.lists.push(List::new(name));
    debug!(index = store.len() - 1, name, "list created");

    Ok(success(CREATED))
}

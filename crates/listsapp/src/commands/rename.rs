use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{self, ListIndex};
use crate::model::ListStore;
use crate::validation::validate_list_name;
use tracing::debug;

/// Renames the list at `index`. `name` must already be trimmed.
///
/// The list being renamed is left out of the uniqueness check, so saving the edit form
/// without changing the name succeeds instead of reporting a duplicate. Renaming produces
/// no status message.
pub fn run(store: &mut ListStore, index: ListIndex, name: &str) -> Result<CmdResult> {
    index::ensure_list(store, index)?;

    let others = store
        .lists
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index.0)
        .map(|(_, list)| list);
    validate_list_name(name, others)?;

    let list = index::list_mut(store, index)?;
    debug!(%index, from = %list.name, to = name, "list renamed");
    list.name = name.to_string();

    Ok(CmdResult::default())
}

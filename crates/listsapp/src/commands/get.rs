use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{self, DisplayList, ListIndex};
use crate::model::ListStore;

/// Every list, paired with its current index.
pub fn all(store: &ListStore) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_lists(index::index_lists(store)))
}

/// The list at `index`.
pub fn one(store: &ListStore, index: ListIndex) -> Result<CmdResult> {
    let list = index::list(store, index)?;
    Ok(CmdResult::default().with_listed_lists(vec![DisplayList::new(index, list)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListsError;
    use crate::test_utils::StoreFixture;

    #[test]
    fn all_lists_in_order() {
        let store = StoreFixture::new()
            .with_lists(&["Work", "Home"])
            .with_list("Trip", &["Passport"])
            .store;
        let result = all(&store).unwrap();

        let names: Vec<_> = result.listed_lists.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Work", "Home", "Trip"]);
        assert_eq!(result.listed_lists[2].index, ListIndex(2));
        assert_eq!(result.listed_lists[2].todos_count, 1);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn all_on_empty_store() {
        let store = ListStore::new();
        assert!(all(&store).unwrap().listed_lists.is_empty());
    }

    #[test]
    fn one_keeps_the_requested_index() {
        let store = StoreFixture::new().with_lists(&["Work", "Home"]).store;
        let result = one(&store, ListIndex(1)).unwrap();

        assert_eq!(result.listed_lists.len(), 1);
        assert_eq!(result.listed_lists[0].index, ListIndex(1));
        assert_eq!(result.listed_lists[0].name, "Home");
    }

    #[test]
    fn one_missing_is_not_found() {
        let store = ListStore::new();
        assert!(matches!(
            one(&store, ListIndex(0)),
            Err(ListsError::NotFound(_))
        ));
    }
}

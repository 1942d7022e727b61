//! Drill-down selection state
//!
//! Holds the feed record currently open in the transcript view, or none.
//! The store is the single writer; the modal only reads it.

use crate::data::feed::FeedRecord;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct SelectionStore {
    current: Option<Rc<FeedRecord>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Replace the current selection. Selecting while a record is already
    /// open swaps it atomically; there is no intermediate empty state.
    pub fn select(&mut self, record: Rc<FeedRecord>) {
        self.current = Some(record);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Rc<FeedRecord>> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::feed::seed_records;

    #[test]
    fn select_replaces_rather_than_stacks() {
        let records = seed_records();
        let mut store = SelectionStore::new();
        assert!(!store.is_active());

        store.select(Rc::clone(&records[2]));
        assert_eq!(store.current().unwrap().id, "3");

        store.select(Rc::clone(&records[0]));
        assert_eq!(store.current().unwrap().id, "1");
    }

    #[test]
    fn clear_after_any_selection_yields_none() {
        let records = seed_records();
        let mut store = SelectionStore::new();
        store.select(Rc::clone(&records[4]));
        store.clear();
        assert!(store.current().is_none());

        // Clearing an empty store stays empty.
        store.clear();
        assert!(!store.is_active());
    }

    #[test]
    fn selection_shares_the_record_not_a_copy() {
        let records = seed_records();
        let mut store = SelectionStore::new();
        store.select(Rc::clone(&records[1]));
        assert!(Rc::ptr_eq(store.current().unwrap(), &records[1]));
    }
}

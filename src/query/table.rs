//! Client Table Controller: local re-sort of an already-fetched result set
//! when the user toggles a column header, without re-querying the backend.
//!
//! Runs the identical Sort Engine as the service, so a server sort and a
//! client re-sort of the same field and direction cannot differ.

use crate::models::{FileRecord, SortField, SortOrder};
use crate::query::sort;

/// An ordered view over a fetched result set plus the active sort state.
#[derive(Debug, Clone)]
pub struct TableView {
    records: Vec<FileRecord>,
    sort_by: SortField,
    sort_order: SortOrder,
}

impl TableView {
    /// Wrap a result set already sorted by the given field and direction
    /// (the state the server responded with).
    pub fn new(records: Vec<FileRecord>, sort_by: SortField, sort_order: SortOrder) -> Self {
        Self {
            records,
            sort_by,
            sort_order,
        }
    }

    /// Toggle a column: the same column flips direction, a new column
    /// resets to ascending. Re-sorts locally.
    pub fn toggle(&mut self, column: SortField) {
        if self.sort_by == column {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_by = column;
            self.sort_order = SortOrder::Asc;
        }
        let records = std::mem::take(&mut self.records);
        self.records = sort::sort_records(records, self.sort_by, self.sort_order);
    }

    #[must_use]
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    #[must_use]
    pub fn sort_by(&self) -> SortField {
        self.sort_by
    }

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }
}

//! Sort Engine: stable, type-aware ordering of a record sequence.
//!
//! The same routine serves the query pipeline and client-side re-sorts,
//! so a server sort and a local re-sort of the same field and direction
//! are indistinguishable.

use std::cmp::Ordering;

use crate::models::{FileRecord, SortField, SortOrder};

/// Order records by the chosen field and direction.
///
/// The sort is stable: records with equal keys retain their relative input
/// order. Descending reverses the comparator's sign only, so ties still
/// break by original input order, not by reversed input order.
#[must_use]
pub fn sort_records(
    mut records: Vec<FileRecord>,
    field: SortField,
    order: SortOrder,
) -> Vec<FileRecord> {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    records
}

fn compare(a: &FileRecord, b: &FileRecord, field: SortField) -> Ordering {
    match field {
        // Case-folded ordinal comparison, not locale collation, so server
        // and client agree regardless of runtime locale.
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Size => a.size_bytes.cmp(&b.size_bytes),
        // Absent timestamps sort as smallest (Option: None < Some).
        SortField::Created => a.created.cmp(&b.created),
        SortField::Modified => a.modified.cmp(&b.modified),
        SortField::Accessed => a.accessed.cmp(&b.accessed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn record(name: &str, size: u64) -> FileRecord {
        FileRecord {
            path: format!("/data/{name}"),
            name: name.into(),
            size_bytes: size,
            created: None,
            modified: None,
            accessed: None,
        }
    }

    fn stamp(s: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(s, 0).unwrap()
    }

    fn names(records: &[FileRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let records = vec![record("Banana", 1), record("apple", 1), record("Cherry", 1)];
        let out = sort_records(records, SortField::Name, SortOrder::Asc);
        assert_eq!(names(&out), vec!["apple", "Banana", "Cherry"]);
    }

    #[test]
    fn size_sort_is_numeric() {
        let records = vec![record("a", 200), record("b", 9), record("c", 100)];
        let out = sort_records(records, SortField::Size, SortOrder::Asc);
        assert_eq!(names(&out), vec!["b", "c", "a"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let records = vec![record("a.csv", 100), record("c.csv", 100), record("b.csv", 100)];
        let out = sort_records(records, SortField::Size, SortOrder::Asc);
        assert_eq!(names(&out), vec!["a.csv", "c.csv", "b.csv"]);
    }

    #[test]
    fn descending_keeps_tie_break_by_input_order() {
        let records = vec![
            record("a.csv", 100),
            record("big", 500),
            record("c.csv", 100),
        ];
        let out = sort_records(records, SortField::Size, SortOrder::Desc);
        // Ties break by original input order even when descending.
        assert_eq!(names(&out), vec!["big", "a.csv", "c.csv"]);
    }

    #[test]
    fn absent_timestamps_sort_smallest() {
        let mut with_stamp = record("stamped", 1);
        with_stamp.modified = Some(stamp(100));
        let without = record("absent", 1);

        let out = sort_records(
            vec![with_stamp.clone(), without.clone()],
            SortField::Modified,
            SortOrder::Asc,
        );
        assert_eq!(names(&out), vec!["absent", "stamped"]);

        let out = sort_records(vec![with_stamp, without], SortField::Modified, SortOrder::Desc);
        assert_eq!(names(&out), vec!["stamped", "absent"]);
    }

    #[test]
    fn timestamp_sort_orders_by_instant() {
        let mut old = record("old", 1);
        old.created = Some(stamp(100));
        let mut new = record("new", 1);
        new.created = Some(stamp(200));

        let out = sort_records(vec![new, old], SortField::Created, SortOrder::Asc);
        assert_eq!(names(&out), vec!["old", "new"]);
    }

    #[test]
    fn repeated_sorts_are_idempotent() {
        let records = vec![record("b", 2), record("a", 1), record("c", 2)];
        let once = sort_records(records, SortField::Size, SortOrder::Asc);
        let twice = sort_records(once.clone(), SortField::Size, SortOrder::Asc);
        assert_eq!(once, twice);
    }
}

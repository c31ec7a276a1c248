//! Filter Engine: conjunctive predicates over a candidate record set.
//!
//! All rules are commutative; a record must pass every enabled rule to
//! remain. Range validation (`start <= end`) happens in
//! `ScanRequest::validate` before any enumeration, not here.

use crate::models::{FileRecord, ScanRequest, TimeRange};

/// Hidden-entry marker on the name.
const HIDDEN_MARKER: char = '.';
/// Compiled-bytecode extension.
const PYC_SUFFIX: &str = ".pyc";
/// Package-init filename.
const INIT_FILE: &str = "__init__.py";

/// Apply every enabled rule of the request to the candidate set.
#[must_use]
pub fn apply(records: Vec<FileRecord>, request: &ScanRequest) -> Vec<FileRecord> {
    records
        .into_iter()
        .filter(|record| passes(record, request))
        .collect()
}

fn passes(record: &FileRecord, request: &ScanRequest) -> bool {
    if request.exclude_hidden && record.name.starts_with(HIDDEN_MARKER) {
        return false;
    }
    if request.exclude_pyc && record.name.ends_with(PYC_SUFFIX) {
        return false;
    }
    if request.exclude_init && record.name == INIT_FILE {
        return false;
    }
    if !passes_extensions(record, request.extensions.as_deref()) {
        return false;
    }
    if request.min_size.is_some_and(|min| record.size_bytes < min) {
        return false;
    }
    if request.max_size.is_some_and(|max| record.size_bytes > max) {
        return false;
    }
    in_range(record.created, request.created_range)
        && in_range(record.modified, request.modified_range)
        && in_range(record.accessed, request.accessed_range)
}

/// Extension allow-list: compared exactly as given, no case folding.
/// An empty or absent list is a no-op.
fn passes_extensions(record: &FileRecord, extensions: Option<&[String]>) -> bool {
    match extensions {
        Some(exts) if !exts.is_empty() => exts.iter().any(|ext| record.name.ends_with(ext.as_str())),
        _ => true,
    }
}

/// A supplied range drops records whose timestamp is absent or falls
/// strictly outside `[start, end]`.
fn in_range(stamp: Option<chrono::DateTime<chrono::Utc>>, range: Option<TimeRange>) -> bool {
    match (range, stamp) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(range), Some(stamp)) => range.contains(stamp),
    }
}

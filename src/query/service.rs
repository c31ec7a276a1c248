//! Query Service: validate, enumerate, build records, filter, sort.
//!
//! There is no caching across requests; each call re-enumerates. That is a
//! simplicity contract for the expected scan sizes, not an optimization gap.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::ScanSettings;
use crate::error::Result;
use crate::models::{FileRecord, ScanRequest};
use crate::query::{filter, sort};
use crate::scan::{Enumerate, FsEnumerator};

/// Executes scan requests against an enumeration collaborator.
pub struct QueryService<E = FsEnumerator> {
    enumerator: E,
}

impl QueryService<FsEnumerator> {
    pub fn new() -> Self {
        Self {
            enumerator: FsEnumerator::new(),
        }
    }

    pub fn from_settings(settings: &ScanSettings) -> Self {
        Self {
            enumerator: FsEnumerator::from_settings(settings),
        }
    }
}

impl Default for QueryService<FsEnumerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Enumerate> QueryService<E> {
    /// Use a custom enumeration collaborator.
    pub fn with_enumerator(enumerator: E) -> Self {
        Self { enumerator }
    }

    /// Run the full pipeline for one request.
    ///
    /// Fails whole with `InvalidQuery` (bad ranges, empty directory,
    /// unresolvable path) or `Scan` (enumeration error); a single entry
    /// that cannot be converted to a record is dropped and the scan
    /// continues.
    pub fn execute(&self, request: &ScanRequest) -> Result<Vec<FileRecord>> {
        request.validate()?;

        let raw = self.enumerator.enumerate(Path::new(&request.directory))?;
        let enumerated = raw.len();

        let records: Vec<FileRecord> = raw
            .into_iter()
            .filter_map(|entry| match FileRecord::from_raw(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("dropping entry: {e}");
                    None
                }
            })
            .collect();

        let records = filter::apply(records, request);
        debug!(
            "scan of {}: {} enumerated, {} after filters",
            request.directory,
            enumerated,
            records.len()
        );

        Ok(sort::sort_records(records, request.sort_by, request.sort_order))
    }
}

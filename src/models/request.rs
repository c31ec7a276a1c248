use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{FscanError, Result};

/// Field a result set can be ordered by.
///
/// A closed enumeration: comparison semantics are selected per variant,
/// never inferred from field names. Serde names match the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum SortField {
    #[serde(rename = "file_name")]
    Name,
    #[serde(rename = "file_size")]
    Size,
    #[serde(rename = "date_created")]
    Created,
    #[serde(rename = "date_modified")]
    Modified,
    #[serde(rename = "date_accessed")]
    Accessed,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction, used when a table column is toggled.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Inclusive `[start, end]` predicate over a timestamp field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether an instant falls within the range, boundaries included.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    fn validate(&self, field: &str) -> Result<()> {
        if self.start > self.end {
            return Err(FscanError::invalid_query(format!(
                "{field} range start is after end"
            )));
        }
        Ok(())
    }
}

/// One scan query: what directory to enumerate and how to filter and order
/// the results. Constructed fresh per submission, never mutated after.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRequest {
    /// Root directory to enumerate; required, non-empty.
    pub directory: String,
    /// Drop entries whose name starts with the hidden-file marker.
    pub exclude_hidden: bool,
    /// Drop compiled-bytecode files (`.pyc`).
    pub exclude_pyc: bool,
    /// Drop package-init files (`__init__.py`).
    pub exclude_init: bool,
    /// When non-empty, only names ending in one of these strings pass.
    /// Compared exactly as given, no case normalization.
    pub extensions: Option<Vec<String>>,
    pub min_size: Option<u64>,
    pub max_size: Option<u64>,
    pub created_range: Option<TimeRange>,
    pub modified_range: Option<TimeRange>,
    pub accessed_range: Option<TimeRange>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl ScanRequest {
    /// A request with the default toggles the dashboard submits:
    /// hidden, `.pyc` and `__init__.py` entries excluded, sorted by name
    /// ascending, no other filters.
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            exclude_hidden: true,
            exclude_pyc: true,
            exclude_init: true,
            extensions: None,
            min_size: None,
            max_size: None,
            created_range: None,
            modified_range: None,
            accessed_range: None,
            sort_by: SortField::Name,
            sort_order: SortOrder::Asc,
        }
    }

    /// Reject malformed requests before any enumeration work begins.
    ///
    /// An inverted range must surface as `InvalidQuery`, never silently
    /// yield zero results.
    pub fn validate(&self) -> Result<()> {
        if self.directory.is_empty() {
            return Err(FscanError::invalid_query("directory is required"));
        }
        if let Some(range) = &self.created_range {
            range.validate("date_created")?;
        }
        if let Some(range) = &self.modified_range {
            range.validate("date_modified")?;
        }
        if let Some(range) = &self.accessed_range {
            range.validate("date_accessed")?;
        }
        if let (Some(min), Some(max)) = (self.min_size, self.max_size) {
            if min > max {
                return Err(FscanError::invalid_query("min_size is greater than max_size"));
            }
        }
        Ok(())
    }
}

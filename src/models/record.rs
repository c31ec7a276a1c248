use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{FscanError, Result};

/// Display name used when neither an explicit name nor a path segment exists.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Raw enumeration data for one filesystem entry, as produced by the
/// enumeration collaborator before any validation.
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    /// Absolute or root-relative path (forward slashes).
    pub path: String,
    /// Explicit display name, if the source provides one.
    pub name: Option<String>,
    /// File size in bytes.
    pub size_bytes: u64,
    pub created: Option<SystemTime>,
    pub modified: Option<SystemTime>,
    pub accessed: Option<SystemTime>,
}

/// One scanned file's metadata.
///
/// `path` is unique per scan result and immutable once produced; `name` is
/// derived from `path` unless the source supplied one explicitly. Timestamps
/// may be absent when the underlying filesystem cannot report them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRecord {
    pub path: String,
    pub name: String,
    pub size_bytes: u64,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    pub accessed: Option<DateTime<Utc>>,
}

impl FileRecord {
    /// Build a record from raw enumeration data.
    ///
    /// An entry without a path cannot be identified and is rejected as
    /// `MalformedRecord`; the caller drops it and continues the scan.
    pub fn from_raw(raw: RawEntry) -> Result<Self> {
        if raw.path.is_empty() {
            return Err(FscanError::MalformedRecord {
                detail: "entry has no path".into(),
            });
        }
        let name = resolve_name(raw.name, &raw.path);
        Ok(Self {
            path: raw.path,
            name,
            size_bytes: raw.size_bytes,
            created: raw.created.map(DateTime::<Utc>::from),
            modified: raw.modified.map(DateTime::<Utc>::from),
            accessed: raw.accessed.map(DateTime::<Utc>::from),
        })
    }
}

/// Resolve the display name: explicit name, else last path segment,
/// else the `"Unknown"` sentinel.
fn resolve_name(explicit: Option<String>, path: &str) -> String {
    if let Some(name) = explicit {
        if !name.is_empty() {
            return name;
        }
    }
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

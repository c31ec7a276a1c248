//! The enumeration collaborator: walks a directory tree and yields raw
//! entries with metadata. Filtering and ordering happen downstream in
//! `query`; the walk itself only prunes configured directory names.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;
use tracing::warn;

use crate::config::ScanSettings;
use crate::error::{FscanError, Result};
use crate::models::RawEntry;

/// Yields raw directory entries with metadata for a given root.
///
/// The trait is the seam between the query pipeline and the filesystem;
/// tests substitute an in-memory implementation.
pub trait Enumerate {
    fn enumerate(&self, root: &Path) -> Result<Vec<RawEntry>>;
}

/// Filesystem enumerator.
///
/// Walks with the standard ignore filters off: hidden-entry handling is a
/// record-level filter in the query contract, not a walk policy. Directory
/// names from `ScanSettings::exclude_dirs` are pruned during the walk.
pub struct FsEnumerator {
    exclude_dirs: Vec<String>,
    follow_links: bool,
}

impl FsEnumerator {
    pub fn new() -> Self {
        Self::from_settings(&ScanSettings::default())
    }

    pub fn from_settings(settings: &ScanSettings) -> Self {
        Self {
            exclude_dirs: settings.exclude_dirs.clone(),
            follow_links: settings.follow_links,
        }
    }
}

impl Default for FsEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Enumerate for FsEnumerator {
    fn enumerate(&self, root: &Path) -> Result<Vec<RawEntry>> {
        if !root.is_dir() {
            return Err(FscanError::invalid_query(format!(
                "not a directory: {}",
                root.display()
            )));
        }

        let exclude_dirs = self.exclude_dirs.clone();
        let mut paths: Vec<PathBuf> = Vec::new();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(self.follow_links)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                if !is_dir {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                !exclude_dirs.iter().any(|d| d == name.as_ref())
            })
            .build();

        for entry in walker {
            // An enumeration error aborts the whole request; the contract
            // has no partial results.
            let entry = entry.map_err(|e| FscanError::Scan {
                path: root.display().to_string(),
                detail: e.to_string(),
            })?;
            if entry.file_type().is_some_and(|ft| ft.is_file()) {
                paths.push(entry.into_path());
            }
        }

        // Metadata in parallel; collect preserves walk order.
        let entries: Vec<RawEntry> = paths
            .par_iter()
            .filter_map(|path| {
                let meta = match path.metadata() {
                    Ok(meta) => meta,
                    Err(e) => {
                        // Entries can vanish mid-walk; drop and continue.
                        warn!("dropping {}: {e}", path.display());
                        return None;
                    }
                };
                Some(RawEntry {
                    path: path.to_string_lossy().replace('\\', "/"),
                    name: None,
                    size_bytes: meta.len(),
                    created: meta.created().ok(),
                    modified: meta.modified().ok(),
                    accessed: meta.accessed().ok(),
                })
            })
            .collect();

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn enumerates_files_with_metadata() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "aaaa").unwrap();
        fs::write(tmp.path().join(".hidden"), "h").unwrap();

        let entries = FsEnumerator::new().enumerate(tmp.path()).unwrap();
        assert_eq!(entries.len(), 2);
        let a = entries.iter().find(|e| e.path.ends_with("a.txt")).unwrap();
        assert_eq!(a.size_bytes, 4);
        assert!(a.modified.is_some());
    }

    #[test]
    fn hidden_entries_are_not_a_walk_concern() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".env"), "secret").unwrap();

        let entries = FsEnumerator::new().enumerate(tmp.path()).unwrap();
        assert!(entries.iter().any(|e| e.path.ends_with(".env")));
    }

    #[test]
    fn excluded_dirs_are_pruned() {
        let tmp = TempDir::new().unwrap();
        let venv = tmp.path().join("venv");
        fs::create_dir_all(&venv).unwrap();
        fs::write(venv.join("pip.cfg"), "").unwrap();
        fs::write(tmp.path().join("main.py"), "").unwrap();

        let entries = FsEnumerator::new().enumerate(tmp.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].path.ends_with("main.py"));
    }

    #[test]
    fn missing_root_is_invalid_query() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = FsEnumerator::new().enumerate(&missing).unwrap_err();
        assert_eq!(err.code(), "invalid_query");
    }

    #[test]
    fn file_root_is_invalid_query() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, "").unwrap();
        let err = FsEnumerator::new().enumerate(&file).unwrap_err();
        assert_eq!(err.code(), "invalid_query");
    }

    #[test]
    fn nested_files_are_found() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("deep.txt"), "x").unwrap();

        let entries = FsEnumerator::new().enumerate(tmp.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].path.ends_with("deep.txt"));
        assert!(!entries[0].path.contains('\\'));
    }
}

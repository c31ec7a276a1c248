use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FscanError, Result};

/// Config filename, looked up in the working directory.
const CONFIG_FILE: &str = "fscan.toml";

/// User-configurable settings from fscan.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scan configuration.
    pub scan: ScanSettings,
    /// Output configuration.
    pub output: OutputSettings,
}

/// Scan-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Directory names pruned from every walk.
    pub exclude_dirs: Vec<String>,
    /// Whether to follow symbolic links during walks.
    pub follow_links: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            exclude_dirs: vec!["venv".into()],
            follow_links: false,
        }
    }
}

/// Output-related settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Pretty-print JSON output (default: minified).
    pub pretty: bool,
}

impl Settings {
    /// Load settings from `fscan.toml` in the given directory.
    /// A missing or unparsable file falls back to defaults.
    #[must_use]
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        std::fs::read_to_string(&path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Load settings from the current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| FscanError::Config(format!("cannot get cwd: {e}")))?;
        Ok(Self::load(&cwd))
    }
}

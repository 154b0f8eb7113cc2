//! Configuration management
//!
//! Settings live in `.monthwatch.toml` at the project root. When a project
//! has none, `~/.monthwatch/config.toml` is used instead.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::paths;

/// monthwatch configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Report preferences
    #[serde(default)]
    pub report: ReportConfig,
    /// Spreadsheet ingestion settings
    #[serde(default)]
    pub ingest: IngestConfig,
}

/// Report preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Tracking year shown in report headers
    #[serde(default = "default_year")]
    pub year: i32,
    /// Currency prefix for amounts
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_year() -> i32 {
    chrono::Local::now().year()
}

fn default_currency() -> String {
    "S/".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
            currency: default_currency(),
        }
    }
}

/// Spreadsheet ingestion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Largest accepted file, in megabytes
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,
    /// Rows processed between progress reports
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Extra header aliases per canonical field (e.g. `ruc = ["documento"]`)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub columns: BTreeMap<String, Vec<String>>,
}

const fn default_max_file_size_mb() -> u64 {
    50
}

const fn default_batch_size() -> usize {
    100
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size_mb(),
            batch_size: default_batch_size(),
            columns: BTreeMap::new(),
        }
    }
}

impl IngestConfig {
    /// Largest accepted file, in bytes
    #[must_use]
    pub const fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}

impl Config {
    /// Path of the project config under `root`
    #[must_use]
    pub fn project_path(root: &Path) -> PathBuf {
        paths::config_toml(root)
    }

    /// Load config for a project, falling back to the global config, then
    /// to defaults. Unreadable files are ignored with a warning.
    #[must_use]
    pub fn load(root: &Path) -> Self {
        let project = Self::project_path(root);
        if project.exists() {
            return Self::load_file(&project).unwrap_or_default();
        }

        let global = paths::global_config();
        if global.exists() {
            return Self::load_file(&global).unwrap_or_default();
        }

        Self::default()
    }

    /// Load config from a specific file
    #[must_use]
    pub fn load_file(path: &Path) -> Option<Self> {
        let parsed = fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok());

        if parsed.is_none() {
            log::warn!("ignoring unreadable config at {}", path.display());
        }
        parsed
    }

    /// Save config to the project root
    pub fn save(&self, root: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(Self::project_path(root), content)?;
        Ok(())
    }
}

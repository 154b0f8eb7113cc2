//! Centralized path definitions for monthwatch
//!
//! This module provides a single source of truth for all filesystem paths used by monthwatch.
//!
//! ## Storage Layout
//!
//! ### Per-Project (working directory)
//!
//! ```text
//! project/
//! ├── .monthwatch.toml          # Project config (optional)
//! └── .monthwatch/              # Local state
//!     ├── orders.json           # Ingested service orders
//!     ├── providers.json        # Provider registry
//!     └── schedule.json         # Committed month assignments
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.monthwatch/
//! └── config.toml               # Fallback config when the project has none
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// Project-level paths
// =============================================================================

/// Directory name for local state
pub const DATA_DIR: &str = ".monthwatch";

/// Project configuration filename
pub const CONFIG_TOML: &str = ".monthwatch.toml";

/// Orders store filename
pub const ORDERS_FILE: &str = "orders.json";

/// Providers store filename
pub const PROVIDERS_FILE: &str = "providers.json";

/// Schedule store filename
pub const SCHEDULE_FILE: &str = "schedule.json";

/// Get the project root directory (the working directory).
#[must_use]
pub fn project_root() -> PathBuf {
    PathBuf::from(".")
}

/// Get path to `.monthwatch.toml` under `root`.
#[must_use]
pub fn config_toml(root: &Path) -> PathBuf {
    root.join(CONFIG_TOML)
}

/// Get path to the `.monthwatch/` state directory under `root`.
#[must_use]
pub fn data_dir(root: &Path) -> PathBuf {
    root.join(DATA_DIR)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = ".monthwatch";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global monthwatch directory.
///
/// Returns `~/.monthwatch/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.monthwatch/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

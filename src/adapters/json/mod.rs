//! JSON file store
//!
//! A small key-value store: each key is one pretty-printed JSON document in
//! the `.monthwatch/` directory. Implements every repository port.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::models::{Order, Provider, Schedule};
use crate::core::ports::{OrderRepository, ProviderRepository, ScheduleRepository};
use crate::paths;

/// File-backed store for orders, providers and the schedule
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at a data directory
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Create a store for the project at `root` (`root/.monthwatch/`)
    #[must_use]
    pub fn for_project(root: &Path) -> Self {
        Self::new(paths::data_dir(root))
    }

    /// Data directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether the data directory exists
    #[must_use]
    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    /// Create the data directory if needed
    pub fn ensure_dir(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating data directory {}", self.dir.display()))
    }

    fn read<T>(&self, key: &str) -> anyhow::Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let path = self.dir.join(key);
        if !path.exists() {
            return Ok(None);
        }
        let content =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let value = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(value))
    }

    fn write<T>(&self, key: &str, value: &T) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.ensure_dir()?;
        let path = self.dir.join(key);
        let content = serde_json::to_string_pretty(value)?;
        fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        log::debug!("saved {}", path.display());
        Ok(())
    }
}

impl OrderRepository for JsonStore {
    fn load_orders(&self) -> anyhow::Result<Vec<Order>> {
        Ok(self.read(paths::ORDERS_FILE)?.unwrap_or_default())
    }

    fn save_orders(&self, orders: &[Order]) -> anyhow::Result<()> {
        self.write(paths::ORDERS_FILE, orders)
    }
}

impl ProviderRepository for JsonStore {
    fn load_providers(&self) -> anyhow::Result<Vec<Provider>> {
        Ok(self.read(paths::PROVIDERS_FILE)?.unwrap_or_default())
    }

    fn save_providers(&self, providers: &[Provider]) -> anyhow::Result<()> {
        self.write(paths::PROVIDERS_FILE, providers)
    }
}

impl ScheduleRepository for JsonStore {
    fn load_schedule(&self) -> anyhow::Result<Schedule> {
        Ok(self.read(paths::SCHEDULE_FILE)?.unwrap_or_default())
    }

    fn save_schedule(&self, schedule: &Schedule) -> anyhow::Result<()> {
        self.write(paths::SCHEDULE_FILE, schedule)
    }
}

//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing monthwatch components.

pub mod mocks;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use monthwatch::core::models::{Classification, MonthIndex, Order, OrderId, Provider};
use tempfile::TempDir;

/// Month from a zero-based index
pub fn m(index: u32) -> MonthIndex {
    MonthIndex::new(index).unwrap()
}

/// Month set from zero-based indices
pub fn months(indices: &[u32]) -> BTreeSet<MonthIndex> {
    indices.iter().copied().map(m).collect()
}

/// Order with a fixed id, owned by `(ruc, name)`
pub fn order(id: OrderId, ruc: &str, name: &str) -> Order {
    let mut order = Order::new(format!("OS-{id}"), ruc, name).with_amount(1000.0);
    order.id = id;
    order
}

/// Registered provider
pub fn provider(ruc: &str, classification: Classification) -> Provider {
    Provider::new(ruc, "ACME S.A.C.", "Ana Torres", classification, "").unwrap()
}

/// A scratch directory holding spreadsheets
pub struct Workbook {
    dir: TempDir,
}

impl Workbook {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Root path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file and return its path
    pub fn add_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

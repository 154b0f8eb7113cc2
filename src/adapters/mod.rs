//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - JSON documents in `.monthwatch/` backing every repository

pub mod json;

pub use json::JsonStore;

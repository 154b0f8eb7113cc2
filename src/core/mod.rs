//! Core domain logic for monthwatch
//!
//! This module contains pure business logic with no I/O dependencies.
//! All storage interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`MonthIndex`, `Classification`, `Order`, `Provider`, `Schedule`)
//! - `services/` - Compliance evaluation, grouping, schedule drafts, reports
//! - `ports/` - Trait definitions for storage

pub mod models;
pub mod ports;
pub mod services;

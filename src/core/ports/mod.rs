//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and the storage that holds orders, providers and the schedule.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! Commands depend on these traits and receive a full snapshot on each load.
//! Every committed mutation is followed by an explicit save; nothing is
//! persisted as a side effect.

mod order_repo;
mod provider_repo;
mod schedule_repo;

pub use order_repo::OrderRepository;
pub use provider_repo::ProviderRepository;
pub use schedule_repo::ScheduleRepository;

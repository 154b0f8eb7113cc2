//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`compliance`] - Consecutive-month runs and status tiers
//! - [`grouping`] - Group orders into persons, merge imports
//! - [`schedule`] - Transactional per-person schedule editing
//! - [`registry`] - Provider registry and registry rows
//! - [`report`] - Consolidated report, summary, monthly analysis

pub mod compliance;
pub mod grouping;
pub mod registry;
pub mod report;
pub mod schedule;

pub use compliance::{
    Evaluation, LimitExceeded, classify, evaluate, longest_consecutive_run,
    validate_assignment_change,
};
pub use grouping::{
    LookupError, MergeOutcome, find_person, group_by_person, merge_orders, person_for_order,
};
pub use registry::{RegistryRow, Upsert, classification_for, registry_rows};
pub use schedule::{ScheduleDraft, ScheduleError, Toggle};

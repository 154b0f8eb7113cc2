//! Schedule repository port

use super::super::models::Schedule;

/// Repository for committed month assignments
///
/// Callers persist explicitly after a committed draft; nothing is saved
/// implicitly.
pub trait ScheduleRepository {
    /// Load the committed schedule
    fn load_schedule(&self) -> anyhow::Result<Schedule>;

    /// Replace the committed schedule
    fn save_schedule(&self, schedule: &Schedule) -> anyhow::Result<()>;
}

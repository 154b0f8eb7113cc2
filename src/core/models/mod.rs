//! Domain models for monthwatch
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`MonthIndex`] - A month of the tracking year
//! - [`Classification`] - Provider category and its consecutive-month limit
//! - [`ComplianceStatus`] - Derived status tier
//! - [`Order`] - A service order from a spreadsheet
//! - [`Provider`] - A registered, classified provider
//! - [`Person`] - Orders grouped by RUC and name
//! - [`Schedule`] - Committed month assignments per order

mod classification;
mod month;
mod order;
mod person;
mod provider;
mod schedule;
mod status;

pub use classification::{Classification, limit_for};
pub use month::{MONTH_NAMES, MonthError, MonthIndex};
pub use order::{Order, OrderId};
pub use person::{Person, PersonKey};
pub use provider::{Provider, ProviderError, RUC_LEN, validate_ruc};
pub use schedule::Schedule;
pub use status::ComplianceStatus;

//! Calendar month index
//!
//! Assignments are tracked at month granularity within a single tracking
//! year. A [`MonthIndex`] is always in `0..=11` (January = 0).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// English month names, indexed by [`MonthIndex`]
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Spanish month names, accepted when parsing spreadsheet or CLI input
const SPANISH_MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Errors produced when building a month index
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthError {
    /// Index outside `0..=11`
    #[error("month index {0} out of range (expected 0-11)")]
    OutOfRange(u32),

    /// Text that is neither a month name nor a number 1-12
    #[error("unrecognized month: {0}. Use a name (e.g. \"march\") or a number 1-12")]
    Unrecognized(String),
}

/// A month of the tracking year, `0` = January ... `11` = December
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MonthIndex(u8);

impl MonthIndex {
    /// January
    pub const FIRST: Self = Self(0);
    /// December
    pub const LAST: Self = Self(11);

    /// Create a month index from a zero-based value
    pub fn new(index: u32) -> Result<Self, MonthError> {
        u8::try_from(index)
            .ok()
            .filter(|i| *i <= Self::LAST.0)
            .map(Self)
            .ok_or(MonthError::OutOfRange(index))
    }

    /// Create a month index from a one-based month number (1 = January)
    pub fn from_number(number: u32) -> Result<Self, MonthError> {
        number
            .checked_sub(1)
            .ok_or_else(|| MonthError::Unrecognized(number.to_string()))
            .and_then(|i| Self::new(i).map_err(|_| MonthError::Unrecognized(number.to_string())))
    }

    /// Zero-based index
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// English name of the month
    #[must_use]
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }

    /// The month immediately after this one in the same year.
    ///
    /// December has no successor: runs never wrap into January.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        if self.0 < Self::LAST.0 { Some(Self(self.0 + 1)) } else { None }
    }

    /// Iterate all twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::LAST.0).map(Self)
    }
}

impl TryFrom<u8> for MonthIndex {
    type Error = MonthError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(u32::from(value))
    }
}

impl From<MonthIndex> for u8 {
    fn from(month: MonthIndex) -> Self {
        month.0
    }
}

impl std::fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for MonthIndex {
    type Err = MonthError;

    /// Accepts 1-based numbers and English or Spanish names (full or the
    /// first three letters), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Self::from_number(number);
        }

        let lower = trimmed.to_lowercase();
        if lower.chars().count() < 3 {
            return Err(MonthError::Unrecognized(s.to_string()));
        }

        MONTH_NAMES
            .iter()
            .zip(SPANISH_MONTH_NAMES.iter())
            .position(|(en, es)| {
                let en = en.to_lowercase();
                en == lower || *es == lower || en.starts_with(&lower) || es.starts_with(&lower)
            })
            .and_then(|i| u8::try_from(i).ok())
            .map(Self)
            .ok_or_else(|| MonthError::Unrecognized(s.to_string()))
    }
}

//! Compliance status tiers
//!
//! Always derived from the current assignments, never stored.

use serde::{Deserialize, Serialize};

/// Compliance status of a person's consecutive-month run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    /// No months assigned, or the provider is not classified
    #[default]
    Unassigned,
    /// Run is comfortably below the limit
    Safe,
    /// Run is one month short of the limit
    Warning,
    /// Run has reached the limit
    Danger,
}

impl ComplianceStatus {
    /// Traffic-light colour used by reports and exports
    #[must_use]
    pub const fn light(self) -> &'static str {
        match self {
            Self::Unassigned => "Gray",
            Self::Safe => "Green",
            Self::Warning => "Yellow",
            Self::Danger => "Red",
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unassigned => write!(f, "unassigned"),
            Self::Safe => write!(f, "safe"),
            Self::Warning => write!(f, "warning"),
            Self::Danger => write!(f, "danger"),
        }
    }
}

impl std::str::FromStr for ComplianceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unassigned" => Ok(Self::Unassigned),
            "safe" => Ok(Self::Safe),
            "warning" | "warn" => Ok(Self::Warning),
            "danger" => Ok(Self::Danger),
            _ => Err(format!("Invalid status: {s}. Use: unassigned, safe, warning, danger")),
        }
    }
}

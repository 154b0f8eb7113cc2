//! Provider classifications
//!
//! Each classification carries a fixed maximum number of consecutive months
//! a provider may be scheduled for.

use serde::{Deserialize, Serialize};

/// Provider classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// Professional services, up to 6 consecutive months
    Professional,
    /// Technician, up to 12 consecutive months
    Technician,
    /// Short-term technician, up to 3 consecutive months
    TechnicianShort,
}

impl Classification {
    /// All classifications, in display order
    pub const ALL: [Self; 3] = [Self::Professional, Self::Technician, Self::TechnicianShort];

    /// Maximum consecutive months for this classification
    #[must_use]
    pub const fn max_consecutive_months(self) -> usize {
        match self {
            Self::Professional => 6,
            Self::Technician => 12,
            Self::TechnicianShort => 3,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Technician => "Technician",
            Self::TechnicianShort => "Technician (3 months)",
        }
    }
}

/// Limit for an optional classification; unclassified providers have limit 0
#[must_use]
pub fn limit_for(classification: Option<Classification>) -> usize {
    classification.map_or(0, Classification::max_consecutive_months)
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Professional => write!(f, "professional"),
            Self::Technician => write!(f, "technician"),
            Self::TechnicianShort => write!(f, "technician-short"),
        }
    }
}

impl std::str::FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "professional" | "profesional" | "pro" => Ok(Self::Professional),
            "technician" | "tecnico" | "técnico" | "tech" => Ok(Self::Technician),
            "technician-short" | "tecnico-3" | "técnico-3" | "tech-short" => {
                Ok(Self::TechnicianShort)
            },
            _ => Err(format!(
                "Invalid classification: {s}. Use: professional, technician, technician-short"
            )),
        }
    }
}

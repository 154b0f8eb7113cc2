//! Provider model
//!
//! A registered provider and its classification. Providers are keyed by RUC.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Classification;

/// Required length of a RUC
pub const RUC_LEN: usize = 11;

/// Errors raised when validating provider data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// A required field was empty after trimming
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// RUC is not exactly 11 digits
    #[error("invalid RUC {0:?}: must be exactly 11 digits")]
    InvalidRuc(String),
}

/// A registered provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Taxpayer number (11 digits, unique)
    pub ruc: String,

    /// Company or person name
    pub name: String,

    /// Contact person
    pub contact_person: String,

    /// Classification that determines the consecutive-month limit
    pub classification: Classification,

    /// Free-form description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// When the provider was first registered (RFC3339)
    pub created_at: String,
}

impl Provider {
    /// Create a validated provider
    ///
    /// Text fields are trimmed; name, RUC and contact person are required.
    pub fn new(
        ruc: &str,
        name: &str,
        contact_person: &str,
        classification: Classification,
        description: &str,
    ) -> Result<Self, ProviderError> {
        let ruc = ruc.trim();
        let name = name.trim();
        let contact_person = contact_person.trim();

        if name.is_empty() {
            return Err(ProviderError::MissingField("name"));
        }
        if ruc.is_empty() {
            return Err(ProviderError::MissingField("ruc"));
        }
        if contact_person.is_empty() {
            return Err(ProviderError::MissingField("contact person"));
        }
        validate_ruc(ruc)?;

        Ok(Self {
            ruc: ruc.to_string(),
            name: name.to_string(),
            contact_person: contact_person.to_string(),
            classification,
            description: description.trim().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    /// Maximum consecutive months for this provider
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.classification.max_consecutive_months()
    }
}

/// Check that a RUC is exactly [`RUC_LEN`] ASCII digits
pub fn validate_ruc(ruc: &str) -> Result<(), ProviderError> {
    if ruc.len() == RUC_LEN && ruc.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ProviderError::InvalidRuc(ruc.to_string()))
    }
}

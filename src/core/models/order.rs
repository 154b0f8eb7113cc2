//! Service order model
//!
//! One row of an ingested spreadsheet: a service order issued to a provider.

use serde::{Deserialize, Serialize};

/// Store-assigned order identifier
pub type OrderId = u64;

/// A service order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned identifier (unique within the store)
    pub id: OrderId,

    /// Document kind (e.g. "Order", "Contract")
    pub kind: String,

    /// Professional certification number
    #[serde(default)]
    pub certification: String,

    /// Order number from the spreadsheet; unique key for imports
    pub number: String,

    /// SIAF commitment code
    #[serde(default)]
    pub siaf: String,

    /// Work area
    pub area: String,

    /// Commitment cell as found in the spreadsheet
    #[serde(default)]
    pub commitment: String,

    /// Service start date as found in the spreadsheet
    pub date: String,

    /// Provider taxpayer number
    pub ruc: String,

    /// Provider name
    pub name: String,

    /// Order concept
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub order_concept: String,

    /// Request concept
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub request_concept: String,

    /// Amount extracted from the commitment (never negative)
    pub amount: f64,

    /// Processing state
    #[serde(default = "default_state")]
    pub state: String,
}

fn default_state() -> String {
    "pending".to_string()
}

impl Order {
    /// Create an order with the required fields; the rest take defaults
    #[must_use]
    pub fn new(number: impl Into<String>, ruc: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: 0,
            kind: "Order".to_string(),
            certification: String::new(),
            number: number.into(),
            siaf: String::new(),
            area: "No area".to_string(),
            commitment: String::new(),
            date: chrono::Local::now().date_naive().to_string(),
            ruc: ruc.into(),
            name: name.into(),
            order_concept: String::new(),
            request_concept: String::new(),
            amount: 0.0,
            state: default_state(),
        }
    }

    /// Set the work area
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Set the amount (negative values are clamped to zero)
    #[must_use]
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = if amount > 0.0 { amount } else { 0.0 };
        self
    }

    /// Set the SIAF code
    #[must_use]
    pub fn with_siaf(mut self, siaf: impl Into<String>) -> Self {
        self.siaf = siaf.into();
        self
    }
}

//! Header-to-field column mapping
//!
//! Spreadsheets arrive with free-form headers. Each canonical field has a list
//! of aliases; the first header containing any alias (case-insensitively)
//! supplies that field.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Canonical order fields read from a spreadsheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Document kind
    Kind,
    /// Certification number
    Certification,
    /// Order number
    Number,
    /// SIAF code
    Siaf,
    /// Work area
    Area,
    /// Commitment (also the amount source)
    Commitment,
    /// Service date
    Date,
    /// Provider taxpayer number
    Ruc,
    /// Provider name
    Name,
    /// Order concept
    OrderConcept,
    /// Request concept
    RequestConcept,
}

impl Field {
    /// Every field, in column-resolution order
    pub const ALL: [Self; 11] = [
        Self::Kind,
        Self::Certification,
        Self::Number,
        Self::Siaf,
        Self::Area,
        Self::Commitment,
        Self::Date,
        Self::Ruc,
        Self::Name,
        Self::OrderConcept,
        Self::RequestConcept,
    ];

    /// Key used for this field in `[ingest.columns]`
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Kind => "kind",
            Self::Certification => "certification",
            Self::Number => "order",
            Self::Siaf => "siaf",
            Self::Area => "area",
            Self::Commitment => "commitment",
            Self::Date => "date",
            Self::Ruc => "ruc",
            Self::Name => "name",
            Self::OrderConcept => "order_concept",
            Self::RequestConcept => "request_concept",
        }
    }

    /// Built-in header aliases
    #[must_use]
    pub const fn default_aliases(self) -> &'static [&'static str] {
        match self {
            Self::Kind => &["tipo", "type", "clasificacion"],
            Self::Certification => &["certificacion", "certificación", "cert", "certificate"],
            Self::Number => &["orden", "order", "numero_orden", "nro_orden"],
            Self::Siaf => &["siaf", "codigo_siaf", "cod_siaf"],
            Self::Area => &["area", "área", "department", "departamento"],
            Self::Commitment => &["compromiso", "commitment", "descripcion", "monto"],
            Self::Date => &["fecha", "date", "fecha_inicio"],
            Self::Ruc => &["ruc", "tax_id", "numero_ruc"],
            Self::Name => &["nombre", "name", "nombres", "apellidos"],
            Self::OrderConcept => &["concepto_orden", "concepto orden", "order_concept"],
            Self::RequestConcept => &["concepto_pedido", "concepto pedido", "request_concept"],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|field| field.key() == key).ok_or_else(|| {
            let known: Vec<_> = Self::ALL.iter().map(|f| f.key()).collect();
            format!("Invalid column field: {s}. Use: {}", known.join(", "))
        })
    }
}

/// Alias lists for every field
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    aliases: BTreeMap<Field, Vec<String>>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        let aliases = Field::ALL
            .into_iter()
            .map(|field| {
                let names = field.default_aliases().iter().map(|a| (*a).to_string()).collect();
                (field, names)
            })
            .collect();
        Self { aliases }
    }
}

impl ColumnMapping {
    /// Default aliases plus extras from config (keyed by [`Field::key`])
    ///
    /// Unknown keys are skipped with a warning.
    #[must_use]
    pub fn with_extra(extra: &BTreeMap<String, Vec<String>>) -> Self {
        let mut mapping = Self::default();
        for (key, names) in extra {
            match key.parse::<Field>() {
                Ok(field) => {
                    mapping.aliases.entry(field).or_default().extend(names.iter().cloned());
                },
                Err(e) => log::warn!("{e}"),
            }
        }
        mapping
    }

    /// Aliases for a field
    #[must_use]
    pub fn aliases(&self, field: Field) -> &[String] {
        self.aliases.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Locate each field in a header row
    #[must_use]
    pub fn resolve(&self, headers: &[String]) -> ColumnIndexes {
        let headers: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
        let mut indexes = BTreeMap::new();

        for field in Field::ALL {
            let aliases: Vec<String> =
                self.aliases(field).iter().map(|a| a.to_lowercase()).collect();
            let found = headers
                .iter()
                .position(|header| aliases.iter().any(|alias| header.contains(alias.as_str())));
            if let Some(index) = found {
                indexes.insert(field, index);
            }
        }

        log::debug!("resolved {} of {} columns", indexes.len(), Field::ALL.len());
        ColumnIndexes(indexes)
    }
}

/// Column position of each field found in a header row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnIndexes(BTreeMap<Field, usize>);

impl ColumnIndexes {
    /// Column index of a field, if the header had one
    #[must_use]
    pub fn get(&self, field: Field) -> Option<usize> {
        self.0.get(&field).copied()
    }

    /// Raw cell for a field in `row`, if present and non-empty
    #[must_use]
    pub fn cell<'a>(&self, row: &'a [String], field: Field) -> Option<&'a str> {
        self.get(field)
            .and_then(|index| row.get(index))
            .map(String::as_str)
            .filter(|cell| !cell.is_empty())
    }
}

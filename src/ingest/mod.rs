//! Spreadsheet ingestion
//!
//! Turns the order spreadsheet (`.xlsx`/`.xls`, or `.csv`/`.json` exports) into
//! [`Order`]s:
//!
//! - `columns` - header aliases and column resolution
//! - `text` - mojibake repair and amount extraction
//! - `reader` - file readers, size limits, batching
//!
//! [`Order`]: crate::core::models::Order

pub mod columns;
pub mod reader;
pub mod text;

pub use columns::{ColumnIndexes, ColumnMapping, Field};
pub use reader::{
    IngestError, Importer, SUPPORTED_EXTENSIONS, read_csv_rows, read_json_rows, read_workbook_rows,
};
pub use text::{clean_text, extract_amount};

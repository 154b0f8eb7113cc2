//! Spreadsheet readers and row-to-order conversion

use std::fs;
use std::path::{Path, PathBuf};

use calamine::{Reader, open_workbook_auto};
use thiserror::Error;
use walkdir::WalkDir;

use super::columns::{ColumnIndexes, ColumnMapping, Field};
use super::text::{clean_text, extract_amount};
use crate::config::IngestConfig;
use crate::core::models::Order;

/// Extensions accepted by the importer
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["xlsx", "xls", "csv", "json"];

/// Errors raised while importing a spreadsheet
#[derive(Debug, Error)]
pub enum IngestError {
    /// Extension is not one of [`SUPPORTED_EXTENSIONS`]
    #[error("unsupported file type: {0} (expected .xlsx, .xls, .csv or .json)")]
    UnsupportedFile(PathBuf),

    /// File exceeds the configured size limit
    #[error("{path} is {size} bytes; the limit is {limit} bytes")]
    FileTooLarge {
        /// Offending file
        path: PathBuf,
        /// Actual size
        size: u64,
        /// Configured limit
        limit: u64,
    },

    /// Fewer than a header row and one data row
    #[error("{0} must contain a header row and at least one data row")]
    TooFewRows(PathBuf),

    /// Every data row was empty or lacked a RUC
    #[error("no valid rows in {0}")]
    NoValidRows(PathBuf),

    /// A directory held no supported spreadsheets
    #[error("no .xlsx, .xls, .csv or .json files found in {0}")]
    NoSpreadsheets(PathBuf),

    /// A workbook had no worksheet
    #[error("{0} has no worksheets")]
    NoWorksheet(PathBuf),

    /// A JSON document was not an array of rows
    #[error("JSON input must be an array of rows")]
    NotRows,

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse error
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook parse error
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// JSON parse error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error walking a directory
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Reads spreadsheets into orders
#[derive(Debug, Clone)]
pub struct Importer {
    mapping: ColumnMapping,
    max_file_size: u64,
    batch_size: usize,
}

impl Default for Importer {
    fn default() -> Self {
        Self::new(&IngestConfig::default())
    }
}

impl Importer {
    /// Create an importer from ingestion settings
    #[must_use]
    pub fn new(config: &IngestConfig) -> Self {
        Self {
            mapping: ColumnMapping::with_extra(&config.columns),
            max_file_size: config.max_file_size_bytes(),
            batch_size: config.batch_size.max(1),
        }
    }

    /// Import a file, or every supported file under a directory
    pub fn import_path(&self, path: &Path) -> Result<Vec<Order>, IngestError> {
        if !path.is_dir() {
            return self.import_file(path);
        }

        let files = find_spreadsheets(path)?;
        if files.is_empty() {
            return Err(IngestError::NoSpreadsheets(path.to_path_buf()));
        }

        let mut numbering = DefaultNumbering::new();
        let mut orders = Vec::new();
        for file in files {
            orders.extend(self.read_file(&file, &mut numbering)?);
        }
        Ok(orders)
    }

    /// Import one `.xlsx`, `.xls`, `.csv` or `.json` file
    pub fn import_file(&self, path: &Path) -> Result<Vec<Order>, IngestError> {
        self.read_file(path, &mut DefaultNumbering::new())
    }

    fn read_file(
        &self,
        path: &Path,
        numbering: &mut DefaultNumbering,
    ) -> Result<Vec<Order>, IngestError> {
        let extension = extension_of(path)
            .ok_or_else(|| IngestError::UnsupportedFile(path.to_path_buf()))?;

        let size = fs::metadata(path)?.len();
        if size > self.max_file_size {
            return Err(IngestError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.max_file_size,
            });
        }

        let rows = match extension.as_str() {
            "xlsx" | "xls" => read_workbook_rows(path)?,
            "csv" => read_csv_rows(&fs::read(path)?)?,
            _ => read_json_rows(&fs::read_to_string(path)?)?,
        };
        if rows.len() < 2 {
            return Err(IngestError::TooFewRows(path.to_path_buf()));
        }

        let orders = self.convert_rows(&rows, numbering);
        if orders.is_empty() {
            return Err(IngestError::NoValidRows(path.to_path_buf()));
        }
        log::info!("imported {} orders from {}", orders.len(), path.display());
        Ok(orders)
    }

    /// Convert rows (header first) into orders
    ///
    /// Empty rows and rows without a RUC are dropped. Returned orders have
    /// id 0; the store assigns ids when merging.
    #[must_use]
    pub fn orders_from_rows(&self, rows: &[Vec<String>]) -> Vec<Order> {
        self.convert_rows(rows, &mut DefaultNumbering::new())
    }

    fn convert_rows(&self, rows: &[Vec<String>], numbering: &mut DefaultNumbering) -> Vec<Order> {
        let Some((headers, data)) = rows.split_first() else {
            return Vec::new();
        };
        let columns = self.mapping.resolve(headers);
        let mut orders = Vec::new();

        for (batch_index, batch) in data.chunks(self.batch_size).enumerate() {
            for (offset, row) in batch.iter().enumerate() {
                let line = batch_index * self.batch_size + offset + 2;
                let fallback = numbering.next_number();
                if let Some(order) = order_from_row(&columns, row, fallback, line) {
                    orders.push(order);
                }
            }
            let processed = batch_index * self.batch_size + batch.len();
            log::debug!("processed {processed}/{} rows", data.len());
        }

        orders
    }
}

/// Default order numbers for rows without one
///
/// The stamp is taken once per import and the counter runs across every file
/// of that import, so numbers never repeat within it.
#[derive(Debug)]
struct DefaultNumbering {
    stamp: i64,
    next: usize,
}

impl DefaultNumbering {
    fn new() -> Self {
        Self {
            stamp: chrono::Utc::now().timestamp_millis(),
            next: 0,
        }
    }

    fn next_number(&mut self) -> String {
        let number = format!("ORD-{}-{}", self.stamp, self.next);
        self.next += 1;
        number
    }
}

fn order_from_row(
    columns: &ColumnIndexes,
    row: &[String],
    fallback: String,
    line: usize,
) -> Option<Order> {
    if row.iter().all(|cell| cell.trim().is_empty()) {
        return None;
    }

    let text = |field: Field| columns.cell(row, field).map(clean_text).filter(|s| !s.is_empty());

    let Some(ruc) = text(Field::Ruc) else {
        log::debug!("skipping row {line} without RUC");
        return None;
    };

    let commitment = columns.cell(row, Field::Commitment).unwrap_or_default();
    let number = text(Field::Number).unwrap_or(fallback);
    let name = text(Field::Name).unwrap_or_else(|| "Unnamed".to_string());

    let mut order = Order::new(number, ruc, name).with_amount(extract_amount(commitment));
    order.commitment = clean_text(commitment);
    if let Some(kind) = text(Field::Kind) {
        order.kind = kind;
    }
    if let Some(area) = text(Field::Area) {
        order.area = area;
    }
    if let Some(date) = text(Field::Date) {
        order.date = date;
    }
    order.certification = text(Field::Certification).unwrap_or_default();
    order.siaf = text(Field::Siaf).unwrap_or_default();
    order.order_concept = text(Field::OrderConcept).unwrap_or_default();
    order.request_concept = text(Field::RequestConcept).unwrap_or_default();
    Some(order)
}

/// Lowercased extension if it is supported
fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .filter(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Supported files under `dir`, skipping hidden entries, sorted
fn find_spreadsheets(dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).into_iter().filter_entry(|e| e.path() == dir || !is_hidden(e)) {
        let entry = entry?;
        if entry.file_type().is_file() && extension_of(entry.path()).is_some() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}

/// Pick `;` when the header line has more semicolons than commas
fn detect_delimiter(bytes: &[u8]) -> u8 {
    let header = bytes.split(|b| *b == b'\n').next().unwrap_or_default();
    let semicolons = header.iter().filter(|b| **b == b';').count();
    let commas = header.iter().filter(|b| **b == b',').count();
    if semicolons > commas { b';' } else { b',' }
}

/// Parse CSV bytes into rows of cells
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_csv_rows(bytes: &[u8]) -> Result<Vec<Vec<String>>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(detect_delimiter(bytes))
        .from_reader(bytes);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        rows.push(record.iter().map(|cell| String::from_utf8_lossy(cell).into_owned()).collect());
    }
    Ok(rows)
}

/// Read the first worksheet of a workbook into rows of cells
pub fn read_workbook_rows(path: &Path) -> Result<Vec<Vec<String>>, IngestError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet(path.to_path_buf()))??;

    Ok(range.rows().map(|row| row.iter().map(ToString::to_string).collect()).collect())
}

/// Parse a JSON array of rows into cells
pub fn read_json_rows(content: &str) -> Result<Vec<Vec<String>>, IngestError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let rows = value.as_array().ok_or(IngestError::NotRows)?;
    rows.iter()
        .map(|row| {
            row.as_array()
                .map(|cells| cells.iter().map(cell_text).collect::<Vec<_>>())
                .ok_or(IngestError::NotRows)
        })
        .collect()
}

fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

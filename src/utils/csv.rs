//! CSV encoding for panel and contact imports
//!
//! The legacy import operations accept comma-separated content with `"`
//! encapsulation and a header row. Rows arrive as JSON objects; key
//! order is preserved, so the header is deterministic.

use crate::error::AppError;
use csv::{Reader, Writer};
use serde_json::{Map, Value};

/// Encodes rows as CSV for import, deriving the header from the rows
///
/// The header is the union of all row keys in first-seen order, so rows
/// with differing key sets are all representable. Cells missing from a
/// row are left empty. An empty row slice encodes to an empty string.
pub fn rows_to_csv(rows: &[Map<String, Value>]) -> Result<String, AppError> {
    if rows.is_empty() {
        return Ok(String::new());
    }
    let mut header: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !header.iter().any(|h| h == key) {
                header.push(key.clone());
            }
        }
    }
    rows_to_csv_with_header(rows, &header)
}

/// Encodes rows as CSV under a fixed header
///
/// Cells missing from a row are left empty; row keys outside the header
/// are ignored.
pub fn rows_to_csv_with_header(
    rows: &[Map<String, Value>],
    header: &[String],
) -> Result<String, AppError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        let record: Vec<String> = header
            .iter()
            .map(|key| row.get(key).map(cell_text).unwrap_or_default())
            .collect();
        writer.write_record(&record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| AppError::InvalidInput(e.to_string()))
}

/// Reads the header row of CSV content
pub fn header_columns(csv_text: &str) -> Result<Vec<String>, AppError> {
    let mut reader = Reader::from_reader(csv_text.as_bytes());
    let headers = reader.headers()?;
    Ok(headers.iter().map(str::to_owned).collect())
}

/// Finds the 1-based column index of a header name, the numbering the
/// legacy import operations expect
pub fn column_index(header: &[String], name: &str) -> Option<u32> {
    header
        .iter()
        .position(|column| column == name)
        .map(|index| index as u32 + 1)
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

//! CSV import and export of loan records.
//!
//! Export writes one column per top-level key (nested objects and arrays as
//! compact JSON). Import reverses it: empty cells are absent keys, cells whose
//! text is the canonical JSON form of a number, boolean, object or array take
//! that type, and everything else stays a string.

use loandoc_types::LoanRecord;
use serde_json::Value;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Union of the records' top-level keys, in first-seen order.
pub fn columns_for(records: &[LoanRecord]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Writes `records` as CSV with a header row of `columns`. Returns the number
/// of data rows written.
pub fn export_records<W: Write>(records: &[LoanRecord], columns: &[String], writer: W) -> Result<usize, CsvError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(columns)?;
    for record in records {
        let row = columns
            .iter()
            .map(|column| record.as_map().get(column).map(cell_text).unwrap_or_default());
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    log::info!("Exported {} record(s) across {} column(s)", records.len(), columns.len());
    Ok(records.len())
}

pub fn export_to_path(records: &[LoanRecord], path: impl AsRef<Path>) -> Result<usize, CsvError> {
    let columns = columns_for(records);
    export_records(records, &columns, File::create(path)?)
}

/// Reads records from CSV with a header row.
pub fn import_records<R: Read>(reader: R) -> Result<Vec<LoanRecord>, CsvError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let mut record = LoanRecord::new();
        for (column, cell) in headers.iter().zip(row.iter()) {
            if let Some(value) = cell_value(cell) {
                record.insert(column, value);
            }
        }
        records.push(record);
    }
    log::info!("Imported {} record(s)", records.len());
    Ok(records)
}

pub fn import_from_path(path: impl AsRef<Path>) -> Result<Vec<LoanRecord>, CsvError> {
    import_records(File::open(path)?)
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn cell_value(cell: &str) -> Option<Value> {
    if cell.is_empty() {
        return None;
    }
    let typed = match cell.as_bytes()[0] {
        b'{' | b'[' | b'-' | b'0'..=b'9' | b't' | b'f' => serde_json::from_str::<Value>(cell).ok(),
        _ => None,
    };
    // "9.50" or "1e2" would come back as 9.5 or 100.0, so only canonical text retypes.
    match typed {
        Some(v @ (Value::Number(_) | Value::Bool(_) | Value::Object(_) | Value::Array(_)))
            if v.to_string() == cell =>
        {
            Some(v)
        }
        _ => Some(Value::String(cell.to_string())),
    }
}

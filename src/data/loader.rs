//! Table ingestion from CSV and JSON records
//!
//! Builds a [`Table`] from the formats wide datasets usually arrive in. CSV
//! headers and JSON object keys become column names; every cell is kept as
//! text, since the pipeline only ever typesets it.

use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use crate::table::{Column, Table};
use crate::utils::error::{WideTableError, WideTableResult};

/// Parse CSV text into a table. The first record supplies column names.
pub fn table_from_csv_str(input: &str) -> WideTableResult<Table> {
    read_csv(csv::ReaderBuilder::new().from_reader(input.as_bytes()))
}

/// Read a CSV file into a table
pub fn table_from_csv_path(path: impl AsRef<Path>) -> WideTableResult<Table> {
    let reader = csv::ReaderBuilder::new()
        .from_path(path.as_ref())
        .map_err(csv_error)?;
    read_csv(reader)
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> WideTableResult<Table> {
    let headers = reader.headers().map_err(csv_error)?.clone();
    let mut columns: Vec<Column> = headers
        .iter()
        .map(|name| Column::new(name, Vec::new()))
        .collect();

    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        for (col, cell) in columns.iter_mut().zip(record.iter()) {
            col.values.push(cell.to_string());
        }
    }

    let mut table = Table::new();
    for column in columns {
        table.push_column(column);
    }
    Ok(table)
}

fn csv_error(err: csv::Error) -> WideTableError {
    match err.position().map(|p| p.line() as usize) {
        Some(line) => WideTableError::parse_at(err.to_string(), line),
        None => WideTableError::parse(err.to_string()),
    }
}

/// Build a table from a JSON array of objects.
///
/// Column order follows first appearance across the records; records missing
/// a key contribute an empty cell for it. Non-string scalars keep their JSON
/// rendering, nulls become empty cells.
pub fn table_from_json_records(input: &str) -> WideTableResult<Table> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| WideTableError::parse_at(e.to_string(), e.line()))?;
    let records = value
        .as_array()
        .ok_or_else(|| WideTableError::parse("expected a top-level JSON array of objects"))?;

    let mut columns: IndexMap<String, Vec<String>> = IndexMap::new();

    for (row, record) in records.iter().enumerate() {
        let object = record.as_object().ok_or_else(|| {
            WideTableError::parse(format!("record {} is not a JSON object", row))
        })?;

        for (key, value) in object {
            let cells = columns.entry(key.clone()).or_insert_with(|| {
                // Column first seen now: backfill earlier rows
                vec![String::new(); row]
            });
            cells.push(scalar_to_cell(value));
        }
        // Keys absent from this record get an empty cell
        for cells in columns.values_mut() {
            if cells.len() < row + 1 {
                cells.push(String::new());
            }
        }
    }

    let mut table = Table::new();
    for (name, values) in columns {
        table.push_column(Column::new(name, values));
    }
    Ok(table)
}

fn scalar_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

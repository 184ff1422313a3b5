//! JSON inputs: row dumps (a top-level array of row arrays) and record
//! artifacts produced by the extractor.

use serde_json::Value;

use crate::error::{MatrixError, Result};
use crate::model::{RawCell, RawRow, Record};

/// Parse a JSON 2-D cell array into sheet rows.
///
/// Cells may be strings, numbers, booleans or null. A row that is not an
/// array, or a nested array/object cell, rejects the whole input.
pub fn parse_json_rows(bytes: &[u8]) -> Result<Vec<RawRow>> {
    let value: Value = serde_json::from_slice(bytes)?;
    let Value::Array(rows) = value else {
        return Err(MatrixError::InvalidRow {
            row: 0,
            msg: "top-level value is not an array of rows".to_string(),
        });
    };

    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| parse_row(idx + 1, row))
        .collect()
}

fn parse_row(line: usize, row: Value) -> Result<RawRow> {
    let cells = match row {
        Value::Array(cells) => cells,
        other => {
            return Err(MatrixError::InvalidRow {
                row: line,
                msg: format!("expected an array, got {}", kind(&other)),
            });
        }
    };

    cells
        .into_iter()
        .enumerate()
        .map(|(column, cell)| match cell {
            Value::Null => Ok(RawCell::Empty),
            Value::String(s) => Ok(RawCell::Text(s)),
            Value::Bool(b) => Ok(RawCell::Bool(b)),
            Value::Number(n) => Ok(match n.as_i64() {
                Some(i) => RawCell::Int(i),
                None => RawCell::Float(n.as_f64().unwrap_or(f64::NAN)),
            }),
            other => Err(MatrixError::InvalidRow {
                row: line,
                msg: format!("column {column}: unsupported {} cell", kind(&other)),
            }),
        })
        .collect()
}

/// Parse a record artifact back into records.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<Record>> {
    Ok(serde_json::from_slice(bytes)?)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

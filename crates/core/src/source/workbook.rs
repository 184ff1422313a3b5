//! Workbook reading via calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use crate::error::{MatrixError, Result};
use crate::model::{RawCell, RawRow};

/// Read every row of the first worksheet.
///
/// Dates come through as their serial number; error cells (`#N/A`, ...)
/// are treated as empty.
pub fn read_workbook(path: &Path) -> Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(MatrixError::NoWorksheet)??;

    debug!(
        path = %path.display(),
        rows = range.height(),
        columns = range.width(),
        "loaded first worksheet"
    );

    Ok(range
        .rows()
        .map(|row| row.iter().map(raw_cell).collect())
        .collect())
}

fn raw_cell(data: &Data) -> RawCell {
    match data {
        Data::Empty | Data::Error(_) => RawCell::Empty,
        Data::String(s) => RawCell::Text(s.clone()),
        Data::Int(n) => RawCell::Int(*n),
        Data::Float(f) => RawCell::Float(*f),
        Data::Bool(b) => RawCell::Bool(*b),
        Data::DateTime(dt) => RawCell::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
    }
}

//! Spreadsheet to record extraction.
//!
//! The worksheet is laid out as a category header followed by row pairs:
//! the first row of a pair holds display values, the row below holds the
//! identifier and description lines for the same column.
//!
//! - `extract_records()` - Flatten a sheet into records
//! - `extract()` - Same, also returning the category header
//! - `extract_file()` - Read a sheet file and extract it
//! - `write_records()` / `write_artifact()` - Serialize the JSON artifact

mod writer;

pub use writer::{OutputOptions, to_json, write_artifact, write_records};

use std::path::Path;

use tracing::{debug, info};

use crate::error::{MatrixError, Result};
use crate::model::cell::{is_blank, normalize_row};
use crate::model::{Cell, RawCell, RawRow, Record};
use crate::source::read_rows;

/// What to do with a final data row that has no identifier row below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingRow {
    /// Fail with `MatrixError::UnpairedRow`.
    #[default]
    Reject,
    /// Drop the dangling row.
    Ignore,
}

/// Options for record extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractOptions {
    /// Handling of an odd number of data rows.
    pub trailing_row: TrailingRow,
}

/// Result of a full extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    /// Header categories in column order. Absent header cells are skipped.
    pub categories: Vec<String>,
    /// Records in encounter order.
    pub records: Vec<Record>,
}

/// A normalized, non-blank sheet row with its 1-based source row number.
struct SheetRow<'a> {
    line: usize,
    raw: &'a [RawCell],
    cells: Vec<Cell>,
}

/// Flatten sheet rows into records.
///
/// # Errors
/// Fails on non-rectangular input, an unpaired trailing row (unless
/// ignored), a value without an identifier cell, an identifier cell that
/// is not text, or a value under an absent header. Nothing is returned on
/// failure.
pub fn extract_records(rows: &[RawRow], options: &ExtractOptions) -> Result<Vec<Record>> {
    extract(rows, options).map(|extraction| extraction.records)
}

/// Flatten sheet rows into records, keeping the header categories.
pub fn extract(rows: &[RawRow], options: &ExtractOptions) -> Result<Extraction> {
    let mut data = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let cells = normalize_row(row);
        if is_blank(&cells) {
            debug!(row = idx + 1, "skipping blank row");
            continue;
        }
        data.push(SheetRow {
            line: idx + 1,
            raw: row,
            cells,
        });
    }

    if data.is_empty() {
        return Ok(Extraction::default());
    }

    let width = data[0].cells.len();
    for row in &data {
        if row.cells.len() != width {
            return Err(MatrixError::RaggedRow {
                row: row.line,
                expected: width,
                found: row.cells.len(),
            });
        }
    }

    let header = data.remove(0).cells;

    if data.len() % 2 == 1 {
        let dangling = data.last().map_or(0, |row| row.line);
        match options.trailing_row {
            TrailingRow::Reject => return Err(MatrixError::UnpairedRow { row: dangling }),
            TrailingRow::Ignore => {
                debug!(row = dangling, "ignoring unpaired trailing row");
                data.pop();
            }
        }
    }

    let mut records = Vec::new();
    for pair in data.chunks_exact(2) {
        let (values, ids) = (&pair[0], &pair[1]);
        debug!(value_row = values.line, id_row = ids.line, "reading row pair");

        for (column, value) in values.cells.iter().enumerate() {
            let Some(value) = value else {
                continue;
            };
            let category = header[column]
                .as_ref()
                .ok_or(MatrixError::MissingCategory { column })?;
            let id_cell = ids.cells[column]
                .as_deref()
                .ok_or(MatrixError::MissingIdentifier {
                    row: values.line,
                    column,
                })?;
            // Numbers lose their displayed form ("2.0" reads back as 2).
            if !matches!(ids.raw[column], RawCell::Text(_)) {
                return Err(MatrixError::NonTextIdentifier {
                    row: ids.line,
                    column,
                });
            }
            let (id, description) = split_identifier(id_cell);

            records.push(Record {
                category: category.clone(),
                value: value.clone(),
                id,
                description,
            });
        }
    }

    let categories: Vec<String> = header.into_iter().flatten().collect();
    info!(
        records = records.len(),
        categories = categories.len(),
        "extracted matrix records"
    );

    Ok(Extraction {
        categories,
        records,
    })
}

/// Read a sheet file (workbook or JSON rows) and extract it.
pub fn extract_file(path: &Path, options: &ExtractOptions) -> Result<Extraction> {
    let rows = read_rows(path)?;
    extract(&rows, options)
}

/// Splits an identifier cell into its id line and description.
///
/// Lines are separated by `\n`, with an optional `\r` before it. The first
/// line is the id, the rest are joined back with `\n`.
pub fn split_identifier(cell: &str) -> (String, String) {
    let mut lines = cell
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));
    let id = lines.next().unwrap_or_default().to_string();
    let description = lines.collect::<Vec<_>>().join("\n");
    (id, description)
}

//! Sheet sources.
//!
//! Rows reach the extractor either from a workbook (first worksheet only)
//! or from a JSON dump of the same 2-D cell grid.

mod json;
mod workbook;

pub use json::{parse_json_rows, parse_records};
pub use workbook::read_workbook;

use std::path::Path;

use crate::error::{MatrixError, Result};
use crate::model::{RawRow, Record};

/// Input format, inferred from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Workbook,
    Json,
}

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xla", "xlam", "xls", "ods"];

impl SourceFormat {
    /// Infers the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<SourceFormat> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if ext == "json" {
            Ok(SourceFormat::Json)
        } else if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
            Ok(SourceFormat::Workbook)
        } else {
            Err(MatrixError::UnsupportedFormat(path.display().to_string()))
        }
    }
}

/// Read the rows of a sheet file, dispatching on its extension.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    match SourceFormat::from_path(path)? {
        SourceFormat::Workbook => read_workbook(path),
        SourceFormat::Json => {
            let bytes = std::fs::read(path)?;
            parse_json_rows(&bytes)
        }
    }
}

/// Load a record artifact written by the extractor.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let bytes = std::fs::read(path)?;
    parse_records(&bytes)
}

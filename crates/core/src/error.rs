//! Error types for threatgrid extraction.

use thiserror::Error;

/// Primary error type for sheet loading and record extraction.
///
/// Every variant is fatal: the whole input is rejected and no artifact is
/// written. Classification problems never surface here, an unparsable id
/// suffix just leaves the record untagged.
#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("workbook error: {0}")]
    Workbook(String),

    #[error("workbook has no worksheets")]
    NoWorksheet,

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid row {row}: {msg}")]
    InvalidRow { row: usize, msg: String },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row} has no paired identifier row")]
    UnpairedRow { row: usize },

    #[error("row {row}, column {column}: value has no identifier cell below it")]
    MissingIdentifier { row: usize, column: usize },

    #[error("row {row}, column {column}: identifier cell is not text")]
    NonTextIdentifier { row: usize, column: usize },

    #[error("column {column} has a value but no category header")]
    MissingCategory { column: usize },
}

impl From<calamine::Error> for MatrixError {
    fn from(err: calamine::Error) -> Self {
        MatrixError::Workbook(err.to_string())
    }
}

/// Convenience Result type alias for MatrixError.
pub type Result<T> = std::result::Result<T, MatrixError>;

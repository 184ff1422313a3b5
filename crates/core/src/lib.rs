//! threatgrid - Threat matrix extraction and layout.
//!
//! A reference matrix is authored as a spreadsheet: a header row of
//! categories followed by value/identifier row pairs. The extractor turns
//! the first worksheet into a flat JSON list of records; the layout groups
//! records back into a rectangular category grid and tags each record from
//! the numeric suffix of its identifier.

pub mod classify;
pub mod describe;
pub mod error;
pub mod extract;
pub mod layout;
pub mod model;
pub mod source;

pub use error::{MatrixError, Result};
pub use extract::{
    ExtractOptions, Extraction, OutputOptions, TrailingRow, extract, extract_file, extract_records,
};
pub use layout::{ClassifiedRow, Matrix};
pub use model::{Cell, RawCell, RawRow, Record, Tag, TagSet, ThreatType};
pub use source::{read_records, read_rows};

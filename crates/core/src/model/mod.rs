//! Threat matrix data model - cells, records, and classification tables.
//!
//! This module contains the core data types:
//! - `cell` - Raw spreadsheet cells and their normalized optional form
//! - `record` - Extracted records, the unit of the JSON artifact
//! - `tag` - Threat types and the tags they expand to

pub mod cell;
pub mod record;
pub mod tag;

// Re-export main types for convenience
pub use cell::{Cell, RawCell, RawRow};
pub use record::Record;
pub use tag::{Tag, TagSet, ThreatType};

//! Extracted matrix records.

use serde::{Deserialize, Serialize};

/// One entry of the threat matrix.
///
/// Field order is the serialization order of the JSON artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Category header of the column the entry came from.
    pub category: String,
    /// Display name.
    pub value: String,
    /// Dotted identifier, `<major>.<minor>[.<rest>]`.
    pub id: String,
    /// Remaining lines of the identifier cell, joined by `\n`.
    pub description: String,
}

impl Record {
    pub fn new(
        category: impl Into<String>,
        value: impl Into<String>,
        id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
            id: id.into(),
            description: description.into(),
        }
    }
}

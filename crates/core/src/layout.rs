//! Matrix layout.
//!
//! Records are grouped into one column per category, in first-seen order,
//! and the columns are padded with empty cells to the length of the
//! longest one. Cells are stored row-major: all categories of row 0, then
//! all categories of row 1, and so on. That order is the render order of
//! the grid, changing it changes the visible layout.

use indexmap::IndexMap;
use serde::Serialize;

use crate::classify;
use crate::model::tag::tags_for;
use crate::model::{Record, Tag, TagSet, ThreatType};

/// A record together with its derived classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRow<'a> {
    #[serde(flatten)]
    pub record: &'a Record,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub threat_type: Option<ThreatType>,
    pub tags: TagSet,
}

impl<'a> ClassifiedRow<'a> {
    pub fn new(record: &'a Record) -> Self {
        let threat_type = classify::threat_type(&record.id);
        Self {
            record,
            threat_type,
            tags: tags_for(threat_type),
        }
    }

    /// Whether the row passes a tag filter. No filter passes everything.
    pub fn matches(&self, filter: Option<Tag>) -> bool {
        filter.is_none_or(|tag| self.tags.contains(&tag))
    }
}

/// Rectangular category grid over a borrowed record list.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<'a> {
    categories: Vec<String>,
    height: usize,
    cells: Vec<Option<ClassifiedRow<'a>>>,
}

impl<'a> Matrix<'a> {
    /// Lay out records, with categories in first-occurrence order.
    pub fn build(records: &'a [Record]) -> Self {
        Self::with_categories(std::iter::empty::<String>(), records)
    }

    /// Lay out records with a known header seeding the category order.
    ///
    /// Header categories come first, in the given order, even when no record
    /// uses them; categories only seen in records follow in first-seen order.
    pub fn with_categories<I, S>(header: I, records: &'a [Record]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut partitions: IndexMap<String, Vec<&'a Record>> = IndexMap::new();
        for category in header {
            partitions.entry(category.into()).or_default();
        }
        for record in records {
            match partitions.get_mut(record.category.as_str()) {
                Some(list) => list.push(record),
                None => {
                    partitions.insert(record.category.clone(), vec![record]);
                }
            }
        }

        let height = partitions.values().map(Vec::len).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(height * partitions.len());
        for row in 0..height {
            for list in partitions.values() {
                cells.push(list.get(row).copied().map(ClassifiedRow::new));
            }
        }

        Self {
            categories: partitions.into_keys().collect(),
            height,
            cells,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of categories (columns).
    pub fn width(&self) -> usize {
        self.categories.len()
    }

    /// Size of the largest category (rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells in render order.
    pub fn cells(&self) -> &[Option<ClassifiedRow<'a>>] {
        &self.cells
    }

    /// Grid rows, each `width()` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<ClassifiedRow<'a>>]> {
        self.cells.chunks(self.width().max(1))
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&ClassifiedRow<'a>> {
        if row >= self.height || column >= self.width() {
            return None;
        }
        self.cells[row * self.width() + column].as_ref()
    }

    /// One category's cells top to bottom, trailing empties included.
    pub fn column(&self, column: usize) -> impl Iterator<Item = Option<&ClassifiedRow<'a>>> {
        (0..self.height).map(move |row| self.cell(row, column))
    }

    /// Number of non-empty cells.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

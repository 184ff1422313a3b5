//! Spreadsheet cells.
//!
//! A `RawCell` is whatever the sheet reader produced. Normalization turns
//! it into a `Cell`, an explicit optional string: presence is decided by
//! the value itself, never by truthiness, so `0` and `false` stay present.

/// A cell as read from a worksheet or a JSON row dump.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawCell {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// One worksheet row, in column order.
pub type RawRow = Vec<RawCell>;

/// A normalized cell. `None` means absent.
pub type Cell = Option<String>;

/// Literal line break some exporters leave in otherwise blank cells.
const BLANK_LINE_BREAK: &str = "\r\n";

impl RawCell {
    /// Normalizes the cell into its textual form.
    ///
    /// Empty cells, the empty string and a lone `"\r\n"` are absent.
    pub fn normalize(&self) -> Cell {
        match self {
            RawCell::Empty => None,
            RawCell::Text(s) if s.is_empty() || s == BLANK_LINE_BREAK => None,
            RawCell::Text(s) => Some(s.clone()),
            RawCell::Int(n) => Some(n.to_string()),
            RawCell::Float(f) => Some(format_float(*f)),
            RawCell::Bool(b) => Some(b.to_string()),
        }
    }
}

impl From<&str> for RawCell {
    fn from(s: &str) -> Self {
        RawCell::Text(s.to_string())
    }
}

impl From<String> for RawCell {
    fn from(s: String) -> Self {
        RawCell::Text(s)
    }
}

/// Formats a float the way a spreadsheet displays a general number:
/// whole values without a fractional part.
fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

/// Normalizes a whole row.
pub fn normalize_row(row: &[RawCell]) -> Vec<Cell> {
    row.iter().map(RawCell::normalize).collect()
}

/// Returns true when every cell of a normalized row is absent.
pub fn is_blank(row: &[Cell]) -> bool {
    row.iter().all(Option::is_none)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_markers_are_absent() {
        assert_eq!(RawCell::Empty.normalize(), None);
        assert_eq!(RawCell::from("").normalize(), None);
        assert_eq!(RawCell::from("\r\n").normalize(), None);
    }

    #[test]
    fn test_falsy_values_are_present() {
        assert_eq!(RawCell::Int(0).normalize().as_deref(), Some("0"));
        assert_eq!(RawCell::Float(0.0).normalize().as_deref(), Some("0"));
        assert_eq!(RawCell::Bool(false).normalize().as_deref(), Some("false"));
    }

    #[test]
    fn test_float_formatting() {
        assert_eq!(RawCell::Float(3.0).normalize().as_deref(), Some("3"));
        assert_eq!(RawCell::Float(-2.0).normalize().as_deref(), Some("-2"));
        assert_eq!(RawCell::Float(1.25).normalize().as_deref(), Some("1.25"));
    }

    #[test]
    fn test_whitespace_text_is_present() {
        // Only the exact line break marker is blank.
        assert_eq!(RawCell::from(" ").normalize().as_deref(), Some(" "));
        assert_eq!(RawCell::from("\n").normalize().as_deref(), Some("\n"));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(&normalize_row(&[RawCell::Empty, RawCell::from("\r\n")])));
        assert!(!is_blank(&normalize_row(&[RawCell::Empty, RawCell::Int(0)])));
        assert!(is_blank(&[]));
    }
}

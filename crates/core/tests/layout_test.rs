//! Tests for matrix layout and record classification.

use threatgrid_core::extract::{ExtractOptions, extract_records};
use threatgrid_core::{Matrix, RawCell, Record, Tag, ThreatType};

fn rec(category: &str, value: &str, id: &str) -> Record {
    Record::new(category, value, id, "")
}

fn values(matrix: &Matrix<'_>) -> Vec<Option<String>> {
    matrix
        .cells()
        .iter()
        .map(|cell| cell.as_ref().map(|row| row.record.value.clone()))
        .collect()
}

#[test]
fn test_scenario_layout_and_tags() {
    let input: Vec<Vec<RawCell>> = vec![
        vec!["A".into(), "B".into()],
        vec!["x1".into(), "y1".into()],
        vec!["0.1\r\ndesc1".into(), "1.2\r\ndesc2".into()],
    ];
    let records = extract_records(&input, &ExtractOptions::default()).unwrap();
    let matrix = Matrix::build(&records);

    assert_eq!(matrix.categories(), ["A", "B"]);
    assert_eq!(matrix.width(), 2);
    assert_eq!(matrix.height(), 1);

    let first = matrix.cell(0, 0).unwrap();
    assert_eq!(first.record, &records[0]);
    assert_eq!(first.threat_type, Some(ThreatType::Cloud));
    assert_eq!(first.tags.as_slice(), &[Tag::Cloud]);

    let second = matrix.cell(0, 1).unwrap();
    assert_eq!(second.record, &records[1]);
    assert_eq!(second.threat_type, Some(ThreatType::Containers));
    assert_eq!(second.tags.as_slice(), &[Tag::Containers]);
}

#[test]
fn test_row_major_category_minor_order() {
    let records = vec![
        rec("A", "a1", "1.1"),
        rec("B", "b1", "1.1"),
        rec("A", "a2", "1.1"),
        rec("C", "c1", "1.1"),
        rec("A", "a3", "1.1"),
        rec("B", "b2", "1.1"),
    ];
    let matrix = Matrix::build(&records);

    assert_eq!(matrix.categories(), ["A", "B", "C"]);
    assert_eq!(matrix.height(), 3);
    let expected: Vec<Option<String>> = [
        Some("a1"),
        Some("b1"),
        Some("c1"),
        Some("a2"),
        Some("b2"),
        None,
        Some("a3"),
        None,
        None,
    ]
    .into_iter()
    .map(|v| v.map(str::to_string))
    .collect();
    assert_eq!(values(&matrix), expected);
}

#[test]
fn test_grid_is_rectangular() {
    let records = vec![rec("A", "a1", "0.0"), rec("B", "b1", "0.0"), rec("B", "b2", "0.0")];
    let matrix = Matrix::build(&records);
    assert_eq!(matrix.cells().len(), matrix.width() * matrix.height());
    for row in matrix.rows() {
        assert_eq!(row.len(), matrix.width());
    }
    assert_eq!(matrix.len(), records.len());
}

#[test]
fn test_column_includes_trailing_empty_cells() {
    let records = vec![rec("A", "a1", "1.1"), rec("B", "b1", "1.1"), rec("B", "b2", "1.1")];
    let matrix = Matrix::build(&records);
    let column: Vec<Option<&str>> = matrix
        .column(0)
        .map(|cell| cell.map(|row| row.record.value.as_str()))
        .collect();
    assert_eq!(column, [Some("a1"), None]);
}

#[test]
fn test_header_category_without_records_is_an_empty_column() {
    let records = vec![rec("B", "b1", "1.1"), rec("B", "b2", "1.2")];
    let matrix = Matrix::with_categories(["A", "B"], &records);

    assert_eq!(matrix.categories(), ["A", "B"]);
    assert_eq!(matrix.height(), 2);
    assert!(matrix.column(0).all(|cell| cell.is_none()));
    assert_eq!(matrix.column(0).count(), 2);
}

#[test]
fn test_with_categories_appends_unseen_categories() {
    let records = vec![rec("Z", "z1", "1.1"), rec("A", "a1", "1.1")];
    let matrix = Matrix::with_categories(["A"], &records);
    assert_eq!(matrix.categories(), ["A", "Z"]);
    assert_eq!(
        values(&matrix),
        [Some("a1".to_string()), Some("z1".to_string())]
    );
}

#[test]
fn test_unparsable_ids_are_untagged() {
    let records = vec![
        rec("A", "no dot", "17"),
        rec("A", "word", "3.x"),
        rec("A", "out of range", "3.9"),
        rec("A", "empty", "3."),
    ];
    let matrix = Matrix::build(&records);
    for cell in matrix.cells().iter().flatten() {
        assert_eq!(cell.threat_type, None, "{}", cell.record.value);
        assert!(cell.tags.is_empty(), "{}", cell.record.value);
    }
}

#[test]
fn test_all_type_variants() {
    let records: Vec<Record> = (0..5).map(|n| rec("A", "v", &format!("9.{n}.1"))).collect();
    let matrix = Matrix::build(&records);
    let tags: Vec<Vec<Tag>> = matrix
        .cells()
        .iter()
        .flatten()
        .map(|cell| cell.tags.to_vec())
        .collect();
    assert_eq!(
        tags,
        vec![
            vec![Tag::Cloud, Tag::Containers],
            vec![Tag::Cloud],
            vec![Tag::Containers],
            vec![Tag::CiCd],
            vec![Tag::Cloud, Tag::Containers, Tag::CiCd],
        ]
    );
}

#[test]
fn test_layout_does_not_touch_records() {
    let records = vec![rec("A", "a1", "1.2")];
    let before = records.clone();
    let first = Matrix::build(&records);
    let second = Matrix::build(&records);
    assert_eq!(records, before);
    assert_eq!(first, second);
}

#[test]
fn test_classified_row_json() {
    let records = vec![rec("A", "a1", "1.3"), rec("A", "a2", "nodot")];
    let matrix = Matrix::build(&records);

    let typed = serde_json::to_value(matrix.cell(0, 0).unwrap()).unwrap();
    assert_eq!(typed["category"], "A");
    assert_eq!(typed["type"], "CI/CD");
    assert_eq!(typed["tags"], serde_json::json!(["CI/CD"]));

    let untyped = serde_json::to_value(matrix.cell(1, 0).unwrap()).unwrap();
    assert!(untyped.get("type").is_none());
    assert_eq!(untyped["tags"], serde_json::json!([]));
}

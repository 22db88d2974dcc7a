//! Row decoding and validation behavior on hand-built rows.

use publication_nodes::config::Config;
use publication_nodes::error::{DecodeErrorKind, ListError, ViolationKind};
use publication_nodes::models::RawRow;
use publication_nodes::{decode_row, validate_record};

fn row_with(overrides: &[(&str, &str)]) -> RawRow {
    let mut row: RawRow = [
        ("publication_id", "PB:350696830"),
        ("url", "https://www.researchgate.net/publication/350696830"),
        ("title", "Line Graph Neural Networks for Link Prediction"),
        ("type", "article"),
        ("authors", "['Caihua Shan', 'Nikos Mamoulis']"),
        ("year", "2021.0"),
        ("abstract", "We consider the graph link prediction task."),
        ("citations_count", "12.0"),
        ("topics", "['graph-learning']"),
        ("raw", "True"),
    ]
    .into_iter()
    .collect();

    for (column, value) in overrides {
        row.insert(*column, *value);
    }
    row
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn test_authors_decode_in_order() {
    let record = decode_row(&row_with(&[])).unwrap();
    assert_eq!(record.authors, vec!["Caihua Shan", "Nikos Mamoulis"]);
}

#[test]
fn test_empty_brackets_decode_to_empty_list() {
    let record = decode_row(&row_with(&[("authors", "[]"), ("topics", "[]")])).unwrap();
    assert!(record.authors.is_empty());
    assert!(record.topics.is_empty());
}

#[test]
fn test_raw_literals() {
    assert!(decode_row(&row_with(&[("raw", "True")])).unwrap().raw);
    assert!(!decode_row(&row_with(&[("raw", "False")])).unwrap().raw);

    let err = decode_row(&row_with(&[("raw", "yes")])).unwrap_err();
    assert_eq!(err.column, "raw");
    assert_eq!(err.kind, DecodeErrorKind::InvalidBool("yes".into()));
}

#[test]
fn test_missing_year_is_absent_not_zero() {
    for cell in ["", "nan"] {
        let record = decode_row(&row_with(&[("year", cell)])).unwrap();
        assert_eq!(record.year, None, "year {cell:?}");
    }
}

#[test]
fn test_missing_citations_is_absent() {
    let record = decode_row(&row_with(&[("citations_count", "nan")])).unwrap();
    assert!(record.citations_count.is_none());
    assert_eq!(record.citations(), 0.0);
}

#[test]
fn test_type_is_free_form() {
    let record = decode_row(&row_with(&[("type", "conference-paper")])).unwrap();
    assert_eq!(record.r#type, "conference-paper");
}

#[test]
fn test_malformed_list_reports_column() {
    let err = decode_row(&row_with(&[("topics", "['open")])).unwrap_err();
    assert_eq!(err.column, "topics");
    assert_eq!(
        err.kind,
        DecodeErrorKind::MalformedList(ListError::UnterminatedString { offset: 1 })
    );
}

#[test]
fn test_non_numeric_year() {
    let err = decode_row(&row_with(&[("year", "2021a")])).unwrap_err();
    assert_eq!(err.column, "year");
    assert!(matches!(err.kind, DecodeErrorKind::InvalidFloat(_)));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_prefixed_id_passes() {
    let record = decode_row(&row_with(&[])).unwrap();
    assert!(validate_record(&record, &Config::default()).is_ok());
}

#[test]
fn test_unprefixed_id_fails() {
    let record = decode_row(&row_with(&[("publication_id", "350696830")])).unwrap();
    let err = validate_record(&record, &Config::default()).unwrap_err();
    assert!(err.has("publication_id", ViolationKind::MissingPrefix));
    assert_eq!(err.violations.len(), 1);
}

#[test]
fn test_relative_url_fails() {
    let record = decode_row(&row_with(&[("url", "publication/350696830")])).unwrap();
    let err = validate_record(&record, &Config::default()).unwrap_err();
    assert!(err.has("url", ViolationKind::InvalidUrl));
}

#[test]
fn test_negative_citations_fail() {
    let record = decode_row(&row_with(&[("citations_count", "-1.0")])).unwrap();
    let err = validate_record(&record, &Config::default()).unwrap_err();
    assert!(err.has("citations_count", ViolationKind::NegativeCitations));
}

#[test]
fn test_validation_leaves_record_untouched() {
    let record = decode_row(&row_with(&[("publication_id", "bad")])).unwrap();
    let before = record.clone();
    let _ = validate_record(&record, &Config::default());
    assert_eq!(record, before);
}

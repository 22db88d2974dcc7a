//! End-to-end passes over the sample dataset.

use publication_nodes::config::Config;
use publication_nodes::csv_io::{RowReader, to_raw_row, write_records};
use publication_nodes::decode_row;
use publication_nodes::error::RowError;
use publication_nodes::models::RawRow;
use publication_nodes::pipeline::{self, DatasetReport};

const SAMPLE: &str = include_str!("fixtures/nodes_sample.csv");

fn sample_rows() -> Vec<RawRow> {
    RowReader::new(SAMPLE.as_bytes(), &Config::for_testing())
        .unwrap()
        .map(|row| row.unwrap())
        .collect()
}

#[test]
fn test_sample_header_is_documented_order() {
    let reader = RowReader::new(SAMPLE.as_bytes(), &Config::for_testing()).unwrap();
    assert_eq!(reader.headers().len(), 10);
    assert_eq!(reader.headers()[0], "publication_id");
}

#[test]
fn test_sample_report() {
    let config = Config::for_testing();
    let report = pipeline::summarize(pipeline::process_rows(sample_rows(), &config));

    assert_eq!(
        report,
        DatasetReport {
            total: 8,
            valid: 3,
            csv_errors: 0,
            decode_errors: 2,
            validation_errors: 2,
            duplicates: 1
        }
    );
}

#[test]
fn test_sample_outcomes_keep_row_order() {
    let config = Config::for_testing();
    let outcomes: Vec<_> = pipeline::process_rows(sample_rows(), &config).collect();

    let rows: Vec<usize> = outcomes.iter().map(|o| o.row).collect();
    assert_eq!(rows, (0..8).collect::<Vec<_>>());

    match &outcomes[6].result {
        Err(RowError::DuplicateId { publication_id, first_row }) => {
            assert_eq!(publication_id, "PB:350696830");
            assert_eq!(*first_row, 0);
        }
        other => panic!("expected duplicate, got {other:?}"),
    }
}

#[test]
fn test_short_row_counted_and_indices_follow_file() {
    let header = SAMPLE.lines().next().unwrap();
    let good = "https://www.researchgate.net/publication/1,T,article,[],,,,[],True";
    let csv = format!("{header}\nPB:9,too,short\nPB:1,{good}\nPB:1,{good}\n");

    let config = Config::for_testing();
    let reader = RowReader::new(csv.as_bytes(), &config).unwrap();
    let outcomes: Vec<_> = pipeline::process_rows(reader, &config).collect();

    let rows: Vec<usize> = outcomes.iter().map(|o| o.row).collect();
    assert_eq!(rows, vec![0, 1, 2]);
    assert!(matches!(outcomes[0].result, Err(RowError::Csv(_))));
    assert!(outcomes[1].is_valid());
    assert_eq!(
        outcomes[2].result,
        Err(RowError::DuplicateId { publication_id: "PB:1".into(), first_row: 1 })
    );

    let report = pipeline::summarize(outcomes);
    assert_eq!(report.total, 3);
    assert_eq!(report.csv_errors, 1);
    assert_eq!(report.duplicates, 1);
}

#[test]
fn test_sample_quoted_authors() {
    let config = Config::for_testing();
    let (valid, rejected) = pipeline::partition(pipeline::process_rows(sample_rows(), &config));

    assert_eq!(valid.len(), 3);
    assert_eq!(rejected.len(), 5);

    let survey = &valid[1];
    assert_eq!(survey.authors, vec!["Conan O'Brien", "Smith, J."]);
    assert!(survey.year.is_none());
    assert!(survey.r#abstract.is_none());
    assert!(!survey.raw);

    let untitled = &valid[2];
    assert_eq!(untitled.title, "");
    assert_eq!(untitled.citations_count, Some(0.0));
}

#[test]
fn test_write_then_read_preserves_valid_records() {
    let config = Config::for_testing();
    let (valid, _) = pipeline::partition(pipeline::process_rows(sample_rows(), &config));

    let bytes = write_records(Vec::new(), &valid).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains(",2021.0,"));
    assert!(text.contains(",12.0,"));

    let reread: Vec<_> = RowReader::new(text.as_bytes(), &config)
        .unwrap()
        .map(|row| decode_row(&row.unwrap()).unwrap())
        .collect();
    assert_eq!(reread, valid);
}

#[test]
fn test_raw_row_round_trip() {
    for row in sample_rows() {
        let Ok(record) = decode_row(&row) else { continue };
        assert_eq!(decode_row(&to_raw_row(&record)).unwrap(), record);
    }
}

#[test]
fn test_lenient_header_order() {
    let swapped = SAMPLE.replacen("publication_id,url", "url,publication_id", 1);
    assert!(RowReader::new(swapped.as_bytes(), &Config::for_testing()).is_err());
    assert!(RowReader::new(swapped.as_bytes(), &Config::default()).is_ok());
}

//! Extraction from saved ResearchGate JSON documents.

use publication_nodes::config::Config;
use publication_nodes::csv_io::RowReader;
use publication_nodes::extract::{PublicationExtractor, citation_edges};
use publication_nodes::models::PublicationRecord;
use publication_nodes::{decode_row, pipeline};
use serde_json::Value;

fn fixture(name: &str) -> Value {
    let text = match name {
        "store" => include_str!("fixtures/rigel_store.json"),
        "search" => include_str!("fixtures/search_nodes.json"),
        _ => unreachable!(),
    };
    serde_json::from_str(text).unwrap()
}

#[test]
fn test_store_layout() {
    let extractor = PublicationExtractor::new(&Config::default());
    let records = extractor.publications(&fixture("store"), Some("graph-learning"));

    assert_eq!(records.len(), 2);

    let lgnn = &records[0];
    assert_eq!(lgnn.publication_id, "PB:350696830");
    assert_eq!(
        lgnn.url,
        "https://www.researchgate.net/publication/350696830_Line_Graph_Neural_Networks_for_Link_Prediction"
    );
    assert_eq!(lgnn.authors, vec!["Caihua Shan", "Nikos Mamoulis"]);
    assert_eq!(lgnn.year, Some(2021.0));
    assert_eq!(lgnn.citations_count, Some(12.0));
    assert_eq!(lgnn.r#type, "article");
    assert_eq!(lgnn.topics, vec!["graph-learning"]);
    assert!(lgnn.raw);

    let citing = &records[1];
    assert_eq!(citing.publication_id, "PB:397094004");
    assert!(citing.authors.is_empty());
    assert!(citing.r#abstract.is_none());
    assert!(citing.citations_count.is_none());
}

#[test]
fn test_search_layout_fallback() {
    let extractor = PublicationExtractor::new(&Config::default());
    let records = extractor.publications(&fixture("search"), None);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].publication_id, "PB:371234567");
    assert_eq!(records[0].authors, vec!["Conan O'Brien", "Smith, J."]);
    assert_eq!(records[0].year, Some(2023.0));
    assert_eq!(records[0].citations_count, Some(0.0));
    assert!(records[0].topics.is_empty());
}

#[test]
fn test_empty_document() {
    let extractor = PublicationExtractor::new(&Config::default());
    assert!(extractor.publications(&serde_json::json!({}), None).is_empty());
    assert!(extractor.publications_from_str("not json", None).is_err());
}

#[test]
fn test_custom_base_url() {
    let config = Config { base_url: "http://mirror.local/".into(), ..Config::default() };
    let records = PublicationExtractor::new(&config).publications(&fixture("search"), None);
    assert_eq!(records[0].url, "http://mirror.local/publication/371234567_Survey_Data");
}

#[test]
fn test_extracted_records_validate() {
    let config = Config::default();
    let records = PublicationExtractor::new(&config).publications(&fixture("store"), Some("ai"));
    for record in &records {
        assert!(publication_nodes::validate_record(record, &config).is_ok());
    }
}

#[test]
fn test_citation_edges() {
    let edges = citation_edges(&fixture("store"), "PB:350696830", "graph-learning");

    let citing: Vec<_> = edges.iter().map(|e| e.citing_publication_id.as_str()).collect();
    assert_eq!(citing, vec!["PB:397094004", "PB:390527396", "PB:401000000"]);
    assert!(edges.iter().all(|e| e.cited_publication_id == "PB:350696830"));
    assert!(edges.iter().all(|e| e.topic == "graph-learning"));
}

#[test]
fn test_citation_edges_unknown_publication() {
    assert!(citation_edges(&fixture("store"), "PB:1", "x").is_empty());
    assert!(citation_edges(&fixture("search"), "PB:371234567", "x").is_empty());
}

#[test]
fn test_topics_consolidate_across_documents() {
    let extractor = PublicationExtractor::new(&Config::default());
    let doc = fixture("store");

    let mut records = extractor.publications(&doc, Some("graph-learning"));
    records.extend(extractor.publications(&doc, Some("ai-and-sociology")));

    let merged = pipeline::consolidate_topics(records);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].topics, vec!["graph-learning", "ai-and-sociology"]);
}

#[test]
fn test_citing_publications_ignore_typename() {
    let extractor = PublicationExtractor::new(&Config::default());
    let doc = fixture("store");

    let mut ids: Vec<_> = extractor
        .citing_publications(&doc, Some("graph-learning"))
        .into_iter()
        .map(|r| r.publication_id)
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["PB:350696830", "PB:390527396", "PB:397094004"]);

    // The typed layout still skips the untyped entry
    assert_eq!(extractor.publications(&doc, None).len(), 2);
}

#[test]
fn test_metadata_builds_canonical_url() {
    let extractor = PublicationExtractor::new(&Config::default());
    let doc = fixture("store");

    let lgnn = extractor.metadata(&doc, "PB:350696830").unwrap();
    assert_eq!(lgnn.url, "https://www.researchgate.net/publication/350696830");
    assert_eq!(lgnn.r#type.as_deref(), Some("article"));
    assert_eq!(lgnn.r#abstract.as_deref(), Some("We consider the graph link prediction task."));

    let citing = extractor.metadata(&doc, "PB:397094004").unwrap();
    assert_eq!(citing.r#type.as_deref(), Some("preprint"));
    assert!(citing.r#abstract.is_none());

    assert!(extractor.metadata(&doc, "PB:1").is_none());
    assert!(extractor.metadata(&fixture("search"), "PB:371234567").is_none());
}

#[test]
fn test_enrich_fills_metadata_columns() {
    let config = Config::default();
    let extractor = PublicationExtractor::new(&config);
    let doc = fixture("store");

    let csv = include_str!("fixtures/nodes_sample.csv");
    let row = RowReader::new(csv.as_bytes(), &config).unwrap().next().unwrap().unwrap();
    let mut record = decode_row(&row).unwrap();
    record.r#abstract = None;

    assert!(extractor.enrich(&doc, &mut record));
    assert_eq!(record.url, "https://www.researchgate.net/publication/350696830");
    assert_eq!(record.r#abstract.as_deref(), Some("We consider the graph link prediction task."));
    assert!(publication_nodes::validate_record(&record, &config).is_ok());

    let mut unknown = PublicationRecord { publication_id: "PB:1".into(), ..Default::default() };
    assert!(!extractor.enrich(&doc, &mut unknown));
    assert!(unknown.url.is_empty());
}

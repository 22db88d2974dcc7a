//! Records and citation edges from saved ResearchGate JSON documents.
//!
//! Two layouts are understood:
//!
//! 1. `result.state.rigel.store`: a map keyed like `publication(id:"PB:…")`
//! 2. `result.data.publicationSearch.nodes`: a list of search hits
//!
//! The store is preferred; the node list is used when the store yields
//! nothing. Overview and citation documents carry the same store, read by
//! [`PublicationExtractor::metadata`] and
//! [`PublicationExtractor::citing_publications`]. Extraction is pure:
//! documents are parsed by the caller.

use chrono::{DateTime, Datelike};
use serde::Deserialize;
use serde_json::Value;

use crate::config::Config;
use crate::models::{CitationEdge, PublicationMetadata, PublicationRecord, numeric_id};

const PUBLICATION_TYPENAME: &str = "Publication";
const STORE_KEY_PREFIX: &str = "publication(";
const REF_PREFIX: &str = "publication(id:\"";

/// Publication entity as it appears in both layouts.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublicationNode {
    id: String,

    #[serde(default)]
    title: Option<String>,

    #[serde(default)]
    r#abstract: Option<String>,

    /// ISO datetime, e.g. `2025-11-19T00:00:00+00:00`.
    #[serde(default)]
    publication_date: Option<String>,

    /// Site-relative path such as `publication/350696830_Title`.
    #[serde(default)]
    url: Option<String>,

    #[serde(default)]
    r#type: Option<String>,

    #[serde(default)]
    incoming_citation_count: Option<f64>,

    #[serde(default)]
    authorships: Option<Vec<Authorship>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Authorship {
    #[serde(default)]
    full_name: Option<String>,
}

/// Builds [`PublicationRecord`]s from ResearchGate JSON.
#[derive(Debug, Clone)]
pub struct PublicationExtractor {
    base_url: String,
}

impl PublicationExtractor {
    /// Create an extractor resolving paths against `config.base_url`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self { base_url: config.base_url.trim_end_matches('/').to_string() }
    }

    /// Extract every publication in a document, tagging each with `topic`.
    #[must_use]
    pub fn publications(&self, doc: &Value, topic: Option<&str>) -> Vec<PublicationRecord> {
        if let Some(store) = rigel_store(doc) {
            let records: Vec<_> = store
                .iter()
                .filter(|(key, node)| is_publication_node(key, node))
                .filter_map(|(_, node)| self.record_from_node(node, topic))
                .collect();

            if !records.is_empty() {
                tracing::debug!(count = records.len(), "Extracted publications from store");
                return records;
            }
        }

        let records: Vec<_> = doc["result"]["data"]["publicationSearch"]["nodes"]
            .as_array()
            .map(|nodes| {
                nodes
                    .iter()
                    .filter(|node| node["__typename"] == PUBLICATION_TYPENAME)
                    .filter_map(|node| self.record_from_node(node, topic))
                    .collect()
            })
            .unwrap_or_default();

        tracing::debug!(count = records.len(), "Extracted publications from search nodes");
        records
    }

    /// Every `publication(` entry of a citations document's store.
    ///
    /// Unlike [`Self::publications`] this ignores `__typename`: citing
    /// entries are often stored without it.
    #[must_use]
    pub fn citing_publications(&self, doc: &Value, topic: Option<&str>) -> Vec<PublicationRecord> {
        let Some(store) = rigel_store(doc) else {
            return Vec::new();
        };

        let records: Vec<_> = store
            .iter()
            .filter(|(key, node)| key.starts_with(STORE_KEY_PREFIX) && node.is_object())
            .filter_map(|(_, node)| self.record_from_node(node, topic))
            .collect();

        tracing::debug!(count = records.len(), "Extracted citing publications");
        records
    }

    /// Overview metadata for `publication_id`, or `None` if the store has no
    /// entry with that `id`.
    ///
    /// The URL is rebuilt from the numeric id rather than taken from the
    /// entry's slugged path.
    #[must_use]
    pub fn metadata(&self, doc: &Value, publication_id: &str) -> Option<PublicationMetadata> {
        let entry = rigel_store(doc)?
            .values()
            .find(|node| node.is_object() && node["id"] == publication_id)?;

        let Some(numeric) = numeric_id(publication_id) else {
            tracing::warn!(publication_id = %publication_id, "Publication id has no numeric part");
            return None;
        };

        Some(PublicationMetadata {
            publication_id: publication_id.to_string(),
            url: format!("{}/publication/{numeric}", self.base_url),
            r#type: entry["type"].as_str().map(str::to_string),
            r#abstract: entry["abstract"].as_str().filter(|a| !a.is_empty()).map(str::to_string),
        })
    }

    /// Fill a record's `url`, `type` and `abstract` from an overview document.
    ///
    /// Returns false and leaves the record untouched when the document has
    /// no entry for it.
    pub fn enrich(&self, doc: &Value, record: &mut PublicationRecord) -> bool {
        match self.metadata(doc, &record.publication_id) {
            Some(metadata) => {
                metadata.apply_to(record);
                true
            }
            None => {
                tracing::warn!(publication_id = %record.publication_id, "Metadata not found in store");
                false
            }
        }
    }

    /// Parse a JSON string and extract its publications.
    pub fn publications_from_str(
        &self,
        json: &str,
        topic: Option<&str>,
    ) -> Result<Vec<PublicationRecord>, serde_json::Error> {
        let doc: Value = serde_json::from_str(json)?;
        Ok(self.publications(&doc, topic))
    }

    fn record_from_node(&self, node: &Value, topic: Option<&str>) -> Option<PublicationRecord> {
        let topics: Vec<String> = topic.map(|t| vec![t.to_string()]).unwrap_or_default();

        match PublicationNode::deserialize(node) {
            Ok(parsed) => Some(self.build_record(parsed, topics)),
            Err(e) => {
                let id = node.get("id")?.as_str()?;
                tracing::warn!(publication_id = %id, error = %e, "Keeping partial record");
                Some(PublicationRecord {
                    publication_id: id.to_string(),
                    title: node.get("title").and_then(Value::as_str).unwrap_or_default().to_string(),
                    topics,
                    raw: false,
                    ..Default::default()
                })
            }
        }
    }

    fn build_record(&self, node: PublicationNode, topics: Vec<String>) -> PublicationRecord {
        let authors = node
            .authorships
            .unwrap_or_default()
            .into_iter()
            .filter_map(|a| a.full_name)
            .collect();

        PublicationRecord {
            year: node.publication_date.as_deref().and_then(extract_year).map(f64::from),
            url: node.url.as_deref().map(|p| self.absolute_url(p)).unwrap_or_default(),
            publication_id: node.id,
            title: node.title.unwrap_or_default(),
            r#type: node.r#type.unwrap_or_default(),
            authors,
            r#abstract: node.r#abstract.filter(|a| !a.is_empty()),
            citations_count: node.incoming_citation_count,
            topics,
            raw: true,
        }
    }

    fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }
}

/// Extract the year from an ISO datetime, or from its first four digits.
#[must_use]
pub fn extract_year(publication_date: &str) -> Option<i32> {
    if let Ok(date) = DateTime::parse_from_rfc3339(publication_date) {
        return Some(date.year());
    }
    publication_date.get(..4).filter(|y| y.bytes().all(|b| b.is_ascii_digit()))?.parse().ok()
}

/// Citation edges pointing at `cited_id`, read from its store entry.
#[must_use]
pub fn citation_edges(doc: &Value, cited_id: &str, topic: &str) -> Vec<CitationEdge> {
    let Some(store) = rigel_store(doc) else {
        return Vec::new();
    };

    let key_prefix = format!("{REF_PREFIX}{cited_id}\"");
    let Some((_, entry)) = store.iter().find(|(key, _)| key.starts_with(&key_prefix)) else {
        return Vec::new();
    };

    let pages = entry["incomingCitingPublicationsWithContext"]["__pagination__"]
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or_default();

    let edges: Vec<CitationEdge> = pages
        .iter()
        .filter_map(|page| page["list"].as_array())
        .flatten()
        .filter_map(|item| item["sourcePublication"]["__ref__"].as_str())
        .filter_map(parse_publication_ref)
        .map(|citing| CitationEdge {
            topic: topic.to_string(),
            cited_publication_id: cited_id.to_string(),
            citing_publication_id: citing.to_string(),
        })
        .collect();

    tracing::debug!(cited = %cited_id, count = edges.len(), "Extracted citation edges");
    edges
}

fn rigel_store(doc: &Value) -> Option<&serde_json::Map<String, Value>> {
    doc["result"]["state"]["rigel"]["store"].as_object()
}

fn is_publication_node(key: &str, node: &Value) -> bool {
    key.starts_with(STORE_KEY_PREFIX) && node["__typename"] == PUBLICATION_TYPENAME
}

/// `publication(id:"PB:397094004")` gives `PB:397094004`.
fn parse_publication_ref(reference: &str) -> Option<&str> {
    reference.strip_prefix(REF_PREFIX)?.split('"').next().filter(|id| !id.is_empty())
}

//! Typed publication record, one per dataset row.

use serde::{Deserialize, Serialize};

/// A scraped publication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Dataset-unique id, e.g. `PB:350696830`.
    pub publication_id: String,

    /// Publication page URL.
    pub url: String,

    /// Title (may be empty).
    pub title: String,

    /// Free-form type such as "article", "preprint" or "data".
    pub r#type: String,

    /// Author names in byline order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Publication year, absent when unknown.
    #[serde(default)]
    pub year: Option<f64>,

    /// Abstract, absent when empty.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Incoming citation count, absent when unknown.
    #[serde(default)]
    pub citations_count: Option<f64>,

    /// Search topics the publication was found under.
    #[serde(default)]
    pub topics: Vec<String>,

    /// True only if derived from raw JSON scrape output.
    #[serde(default)]
    pub raw: bool,
}

impl PublicationRecord {
    /// Numeric part of the id (`PB:123` gives `123`).
    #[must_use]
    pub fn numeric_id(&self) -> Option<&str> {
        numeric_id(&self.publication_id)
    }

    /// Citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> f64 {
        self.citations_count.unwrap_or(0.0)
    }
}

/// Numeric part of a publication id, the text after its last `:`.
#[must_use]
pub fn numeric_id(publication_id: &str) -> Option<&str> {
    publication_id.rsplit(':').next().filter(|s| !s.is_empty())
}

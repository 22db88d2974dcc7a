//! Business constraint checks on decoded records.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::config::{Config, dataset::PUBLICATION_ID_PREFIX};
use crate::error::{ValidationError, Violation, ViolationKind};
use crate::models::PublicationRecord;
use crate::schema;

static PUBLICATION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PB:[0-9]+$").expect("valid publication id pattern"));

/// Validate a record, collecting every violation.
///
/// The record is never modified.
pub fn validate_record(record: &PublicationRecord, config: &Config) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    if let Some(kind) = check_publication_id(&record.publication_id) {
        violations.push(Violation { field: schema::PUBLICATION_ID, kind });
    }
    if let Some(kind) = check_url(&record.url, config) {
        violations.push(Violation { field: schema::URL, kind });
    }
    if record.citations_count.is_some_and(|c| c < 0.0) {
        violations.push(Violation {
            field: schema::CITATIONS_COUNT,
            kind: ViolationKind::NegativeCitations,
        });
    }

    if violations.is_empty() { Ok(()) } else { Err(ValidationError { violations }) }
}

/// Check a publication id against `PB:` followed by digits.
#[must_use]
pub fn check_publication_id(id: &str) -> Option<ViolationKind> {
    if id.is_empty() {
        Some(ViolationKind::Missing)
    } else if PUBLICATION_ID.is_match(id) {
        None
    } else if id.starts_with(PUBLICATION_ID_PREFIX) {
        Some(ViolationKind::MalformedId)
    } else {
        Some(ViolationKind::MissingPrefix)
    }
}

/// Check that a URL is absolute, has a host and uses an allowed scheme.
#[must_use]
pub fn check_url(raw: &str, config: &Config) -> Option<ViolationKind> {
    if raw.is_empty() {
        return Some(ViolationKind::Missing);
    }

    match Url::parse(raw) {
        Ok(url) if !url.has_host() => Some(ViolationKind::InvalidUrl),
        Ok(url) if !config.allows_scheme(url.scheme()) => Some(ViolationKind::DisallowedScheme),
        Ok(_) => None,
        Err(_) => Some(ViolationKind::InvalidUrl),
    }
}

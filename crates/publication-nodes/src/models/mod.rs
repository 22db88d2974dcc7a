//! Data models for the publication dataset.
//!
//! Typed records use `#[serde(default)]` for nullable fields so they can be
//! serialized to and from JSON as well as CSV.

mod citation;
mod metadata;
mod raw;
mod record;

pub use citation::CitationEdge;
pub use metadata::PublicationMetadata;
pub use raw::RawRow;
pub use record::{PublicationRecord, numeric_id};

//! Overview metadata for one publication.

use serde::{Deserialize, Serialize};

use super::PublicationRecord;

/// The `url`, `type` and `abstract` columns as read from a publication's
/// overview document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationMetadata {
    pub publication_id: String,

    /// Canonical page URL, `{base_url}/publication/{numeric id}`.
    pub url: String,

    #[serde(default)]
    pub r#type: Option<String>,

    /// Abstract, absent when empty.
    #[serde(default)]
    pub r#abstract: Option<String>,
}

impl PublicationMetadata {
    /// Overwrite the metadata columns of `record`.
    ///
    /// `type` is only replaced when present; an absent abstract clears it.
    pub fn apply_to(self, record: &mut PublicationRecord) {
        record.url = self.url;
        if let Some(ty) = self.r#type {
            record.r#type = ty;
        }
        record.r#abstract = self.r#abstract;
    }
}

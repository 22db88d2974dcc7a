//! Citation edge between two publications.

use serde::{Deserialize, Serialize};

/// `citing_publication_id` cites `cited_publication_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CitationEdge {
    /// Topic the cited publication was found under.
    pub topic: String,
    pub cited_publication_id: String,
    pub citing_publication_id: String,
}

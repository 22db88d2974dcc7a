#![no_main]

use libfuzzer_sys::fuzz_target;
use publication_nodes::config::Config;
use publication_nodes::extract::{PublicationExtractor, citation_edges};

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let extractor = PublicationExtractor::new(&Config::default());
        let _ = extractor.publications(&json, Some("fuzz"));
        let _ = extractor.citing_publications(&json, None);
        let _ = extractor.metadata(&json, "PB:1");
        let _ = citation_edges(&json, "PB:1", "fuzz");
    }
});

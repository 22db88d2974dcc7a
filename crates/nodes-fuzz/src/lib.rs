//! Fuzzing library for publication-nodes.
//!
//! This crate provides fuzzing targets for the bracket list codec, row
//! decoding of arbitrary CSV input, and ResearchGate JSON extraction.
//!
//! # Usage
//!
//! ```bash
//! cd crates/nodes-fuzz
//! cargo +nightly fuzz run fuzz_list_decode -- -max_total_time=60
//! ```

pub use publication_nodes::{codec, csv_io, extract};

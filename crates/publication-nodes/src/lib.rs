//! Publication Nodes
//!
//! Typed decoding and validation for `nodes.csv`, the scraped publication
//! metadata dataset (titles, authors, abstracts, citation counts, topics).
//!
//! # Features
//!
//! - **Schema**: static declaration of the ten documented columns
//! - **Row decoding**: bracketed list, `True`/`False` and nullable float cells
//! - **Validation**: `PB:` ids, well-formed URLs, non-negative citation counts
//! - **Dataset pass**: per-row outcomes, duplicate id detection, summaries
//! - **Extraction**: ResearchGate JSON documents to records and citation edges
//!
//! # Example
//!
//! ```no_run
//! use publication_nodes::{config::Config, csv_io::RowReader, pipeline};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let file = std::fs::File::open("nodes.csv")?;
//!     let reader = RowReader::new(file, &config)?;
//!
//!     let report = pipeline::summarize(pipeline::process_rows(reader, &config));
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod config;
pub mod csv_io;
pub mod decode;
pub mod error;
pub mod extract;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod schema;
pub mod validate;

pub use config::Config;
pub use decode::decode_row;
pub use error::{DatasetError, DecodeError, RowError, ValidationError};
pub use models::{CitationEdge, PublicationRecord, RawRow};
pub use validate::validate_record;

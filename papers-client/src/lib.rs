//! # Papers Client
//!
//! Finds PubMed papers that have at least one author working outside
//! academia, and exports them as CSV or a console table.
//!
//! The pipeline is a single sequential pass:
//!
//! 1. **Search** - ESearch turns a free-text query into PMIDs
//! 2. **Fetch** - EFetch returns the XML records for those PMIDs
//! 3. **Parse** - records become flat [`PaperRecord`]s
//! 4. **Classify** - each author affiliation is checked by [`AffiliationClassifier`]
//! 5. **Project** - papers with non-academic authors become [`OutputRow`]s
//! 6. **Sink** - rows are written by a [`Sink`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use papers_client::{
//!     AffiliationClassifier, ClientConfig, ConsoleFormat, PubMedClient, Sink, collect_papers,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new().with_email("researcher@example.com");
//!     let client = PubMedClient::with_config(config)?;
//!
//!     let rows = collect_papers(
//!         &client,
//!         &AffiliationClassifier::default(),
//!         "cancer immunotherapy",
//!         100,
//!     )
//!     .await?;
//!
//!     Sink::Console(ConsoleFormat::Table).write(&rows)?;
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod pubmed;
pub mod rate_limit;
pub mod sink;
pub mod source;

// Re-export main types for convenience
pub use classify::{ACADEMIC_MARKERS, AffiliationClassifier, NON_ACADEMIC_MARKERS};
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use filter::{OutputRow, filter_records, project};
pub use pipeline::{DEFAULT_MAX_RESULTS, FETCH_BATCH_SIZE, collect_papers, collect_records};
pub use pubmed::{AuthorRecord, PaperRecord, PubMedClient, parse_records};
pub use sink::{ConsoleFormat, Sink, render_table, write_csv, write_csv_file};
pub use source::PaperSource;

//! PubMed access: E-utilities client, EFetch parser and record models
//!
//! - `client/mod.rs` - core client struct and request plumbing
//! - `client/search` - ESearch (query → PMIDs)
//! - `client/fetch` - EFetch (PMIDs → XML)

pub mod client;
pub mod models;
pub mod parser;
pub(crate) mod responses;

// Re-export public types
pub use client::{MAX_RETRIEVABLE, PubMedClient};
pub use models::{AuthorRecord, PaperRecord};
pub use parser::parse_records;

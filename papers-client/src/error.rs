use std::{io, result};

use thiserror::Error;

/// Error types for the search, parse and export pipeline
#[derive(Error, Debug)]
pub enum PubMedError {
    /// HTTP request could not be completed (connection failure, DNS, timeout)
    #[error("{operation} request failed: {source}")]
    RequestError {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status or an unexpected response envelope
    #[error("{operation} API error {status}: {message}")]
    ApiError {
        operation: &'static str,
        status: u16,
        message: String,
    },

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Output file could not be written
    #[error("Failed to write {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// CSV encoding or writing failed
    #[error("CSV output failed: {0}")]
    CsvError(#[from] csv::Error),

    /// Invalid query structure or parameters
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid PMID format
    #[error("Invalid PMID format: {pmid}")]
    InvalidPmid { pmid: String },

    /// Search limit exceeded
    /// ESearch only returns the first 9,999 identifiers of a result set.
    #[error("Search limit exceeded: requested {requested}, maximum is {maximum}")]
    SearchLimitExceeded { requested: usize, maximum: usize },

    /// Failure while fetching one batch of ids
    #[error("{source} (ids: {ids})")]
    Batch {
        ids: String,
        #[source]
        source: Box<PubMedError>,
    },
}

pub type Result<T> = result::Result<T, PubMedError>;

impl PubMedError {
    /// Coarse failure category, used when reporting a failed run
    pub fn category(&self) -> &'static str {
        match self {
            PubMedError::RequestError { .. } => "NetworkError",
            PubMedError::ApiError { .. } => "ApiError",
            PubMedError::XmlError(_) => "ParseError",
            PubMedError::IoError { .. } | PubMedError::CsvError(_) => "IOError",
            PubMedError::InvalidQuery(_)
            | PubMedError::InvalidPmid { .. }
            | PubMedError::SearchLimitExceeded { .. } => "UsageError",
            PubMedError::Batch { source, .. } => source.category(),
        }
    }

    /// Whether the failure came from the network layer, including timeouts
    pub fn is_network(&self) -> bool {
        match self {
            PubMedError::RequestError { .. } => true,
            PubMedError::Batch { source, .. } => source.is_network(),
            _ => false,
        }
    }

    /// Attach the ids of the batch being processed
    pub fn in_batch(self, ids: &[String]) -> Self {
        PubMedError::Batch {
            ids: ids.join(","),
            source: Box::new(self),
        }
    }
}

use async_trait::async_trait;

use crate::error::Result;

/// The two upstream operations the pipeline needs from a literature API
///
/// [`PubMedClient`](crate::PubMedClient) is the production implementation;
/// tests substitute canned responses.
#[async_trait]
pub trait PaperSource: Send + Sync {
    /// Ordered record identifiers matching `query`, at most `max_results` of them
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>>;

    /// Raw XML document describing the given non-empty batch of identifiers
    async fn fetch(&self, ids: &[String]) -> Result<String>;
}

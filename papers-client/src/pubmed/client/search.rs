use tracing::{debug, info, instrument, warn};

use super::PubMedClient;
use crate::error::{PubMedError, Result};
use crate::pubmed::responses::ESearchResult;

/// ESearch cannot page past the first 9,999 identifiers of a result set
pub const MAX_RETRIEVABLE: usize = 9999;

const OPERATION: &str = "ESearch";

impl PubMedClient {
    /// Search PubMed and return matching PMIDs in relevance order
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text PubMed query
    /// * `max_results` - Maximum number of PMIDs to return
    ///
    /// # Errors
    ///
    /// * `PubMedError::InvalidQuery` - If the query is blank
    /// * `PubMedError::SearchLimitExceeded` - If `max_results` is above 9,999
    /// * `PubMedError::RequestError` - If the request fails or times out
    /// * `PubMedError::ApiError` - On a non-success status or a malformed/error envelope
    ///
    /// # Example
    ///
    /// ```no_run
    /// use papers_client::{ClientConfig, PubMedClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::with_config(ClientConfig::new())?;
    ///     let pmids = client.search_ids("cancer immunotherapy", 10).await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, max_results = max_results))]
    pub async fn search_ids(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            return Err(PubMedError::InvalidQuery(
                "search query must not be empty".to_string(),
            ));
        }

        if max_results > MAX_RETRIEVABLE {
            return Err(PubMedError::SearchLimitExceeded {
                requested: max_results,
                maximum: MAX_RETRIEVABLE,
            });
        }

        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retstart=0&retmode=json",
            self.base_url,
            urlencoding::encode(query.trim()),
            max_results
        );

        let response = self.make_request(&url, OPERATION).await?;
        let status = response.status().as_u16();
        let body = Self::read_body(response, OPERATION).await?;

        let search_result: ESearchResult =
            serde_json::from_str(&body).map_err(|e| PubMedError::ApiError {
                operation: OPERATION,
                status,
                message: format!("malformed ESearch response: {}", e),
            })?;

        // NCBI sometimes answers 200 OK with an ERROR field
        if let Some(error_msg) = search_result.esearchresult.error {
            return Err(PubMedError::ApiError {
                operation: OPERATION,
                status,
                message: format!("NCBI ESearch API error: {}", error_msg),
            });
        }

        if let Some(translation) = &search_result.esearchresult.querytranslation {
            debug!(translation = %translation, "PubMed query translation");
        }

        let total_count: usize = search_result
            .esearchresult
            .count
            .as_deref()
            .and_then(|c| c.parse().ok())
            .unwrap_or(0);

        if total_count > max_results {
            warn!(
                total_count,
                max_results, "More results match than were requested; only the first ones are used"
            );
        }

        let ids = search_result.esearchresult.idlist;
        info!(ids = ids.len(), total_count, "Search completed");
        Ok(ids)
    }
}

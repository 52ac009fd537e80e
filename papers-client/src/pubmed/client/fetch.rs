use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, instrument};

use super::PubMedClient;
use crate::error::{PubMedError, Result};

const OPERATION: &str = "EFetch";

impl PubMedClient {
    /// Fetch the EFetch XML document for a batch of PMIDs
    ///
    /// The document holds one `<PubmedArticle>` per id that PubMed knows,
    /// in no guaranteed order. Unknown ids are simply absent.
    ///
    /// # Errors
    ///
    /// * `PubMedError::InvalidQuery` - If `ids` is empty
    /// * `PubMedError::InvalidPmid` - If an id is not numeric (checked before any request)
    /// * `PubMedError::RequestError` - If the request fails or times out
    /// * `PubMedError::ApiError` - On a non-success status or an `<ERROR>` document
    ///
    /// # Example
    ///
    /// ```no_run
    /// use papers_client::{ClientConfig, PubMedClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::with_config(ClientConfig::new())?;
    ///     let ids = vec!["31978945".to_string(), "33515491".to_string()];
    ///     let xml = client.fetch_xml(&ids).await?;
    ///     println!("{} bytes", xml.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, ids), fields(ids_count = ids.len()))]
    pub async fn fetch_xml(&self, ids: &[String]) -> Result<String> {
        if ids.is_empty() {
            return Err(PubMedError::InvalidQuery(
                "at least one PubMed ID is required for fetch".to_string(),
            ));
        }

        let ids: Vec<&str> = ids.iter().map(|id| id.trim()).collect();
        if let Some(bad) = ids
            .iter()
            .find(|id| id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(PubMedError::InvalidPmid {
                pmid: bad.to_string(),
            });
        }

        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url,
            ids.join(",")
        );

        let response = self.make_request(&url, OPERATION).await?;
        let status = response.status().as_u16();
        let xml = Self::read_body(response, OPERATION).await?;

        if let Some(message) = efetch_error_message(&xml) {
            return Err(PubMedError::ApiError {
                operation: OPERATION,
                status,
                message,
            });
        }

        debug!(bytes = xml.len(), "EFetch response received");
        Ok(xml)
    }
}

/// Error text of an `<eFetchResult><ERROR>..</ERROR></eFetchResult>` reply
fn efetch_error_message(xml: &str) -> Option<String> {
    static ERROR_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = ERROR_REGEX.get_or_init(|| {
        Regex::new(r"(?s)<eFetchResult>.*?<ERROR>(.*?)</ERROR>").expect("error pattern is valid")
    });

    re.captures(xml)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

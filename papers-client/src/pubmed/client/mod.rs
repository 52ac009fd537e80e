mod fetch;
mod search;

pub use search::MAX_RETRIEVABLE;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use crate::rate_limit::RateLimiter;
use crate::source::PaperSource;

/// Client for the NCBI E-utilities ESearch and EFetch endpoints
#[derive(Clone, Debug)]
pub struct PubMedClient {
    client: Client,
    pub(crate) base_url: String,
    rate_limiter: RateLimiter,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns [`PubMedError::RequestError`] if the HTTP client cannot be
    /// built (e.g. the TLS backend fails to initialize).
    ///
    /// # Example
    ///
    /// ```
    /// use papers_client::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@example.com");
    ///
    /// let client = PubMedClient::with_config(config)?;
    /// # Ok::<(), papers_client::PubMedError>(())
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()
            .map_err(|source| PubMedError::RequestError {
                operation: "HTTP client setup",
                source,
            })?;

        Ok(Self::with_client(client, config))
    }

    /// Create a client around an existing reqwest client
    ///
    /// The timeout and user agent configured on `client` are used as-is.
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let rate_limiter = config.create_rate_limiter();
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            rate_limiter,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a GET request, appending the NCBI identification parameters
    ///
    /// Any non-success status is turned into [`PubMedError::ApiError`].
    pub(crate) async fn make_request(&self, url: &str, operation: &'static str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        self.rate_limiter.acquire().await;
        debug!(operation, "Making API request to: {}", final_url);

        let response = self
            .client
            .get(&final_url)
            .send()
            .await
            .map_err(|source| PubMedError::RequestError { operation, source })?;

        if !response.status().is_success() {
            warn!(operation, "API request failed with status: {}", response.status());
            return Err(PubMedError::ApiError {
                operation,
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }

    /// Read a response body, classifying failures as network errors
    pub(crate) async fn read_body(response: Response, operation: &'static str) -> Result<String> {
        response
            .text()
            .await
            .map_err(|source| PubMedError::RequestError { operation, source })
    }
}

#[async_trait]
impl PaperSource for PubMedClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        self.search_ids(query, max_results).await
    }

    async fn fetch(&self, ids: &[String]) -> Result<String> {
        self.fetch_xml(ids).await
    }
}

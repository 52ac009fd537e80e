pub mod papers;

use std::time::Duration;

use anyhow::Result;
use papers_client::{ClientConfig, PubMedClient};

pub fn create_pubmed_client(
    api_key: Option<&str>,
    email: Option<&str>,
    tool: &str,
    timeout: Duration,
) -> Result<PubMedClient> {
    let mut config = ClientConfig::new().with_tool(tool).with_timeout(timeout);

    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }

    if let Some(email) = email {
        config = config.with_email(email);
    }

    let client = PubMedClient::with_config(config)?;
    Ok(client)
}

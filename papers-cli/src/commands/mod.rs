pub mod report;

use anyhow::Result;
use papers_client::{ClientConfig, PubMedClient};

pub fn create_pubmed_client(
    api_key: Option<&str>,
    email: Option<&str>,
    tool: &str,
) -> Result<PubMedClient> {
    let mut config = ClientConfig::new().with_tool(tool);

    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }

    if let Some(email) = email {
        config = config.with_email(email);
    }

    Ok(PubMedClient::with_config(config)?)
}

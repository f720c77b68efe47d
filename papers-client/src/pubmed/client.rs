use crate::common::PubMedId;
use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use crate::pubmed::responses::ESearchResult;
use papers_parser::{ArticleRecord, parse_medline};
use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

/// ESearch can only page through the first 9,999 results (retmax is capped at 9999)
pub const MAX_RETRIEVABLE: usize = 9999;

/// Client for the PubMed ESearch and EFetch endpoints
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use papers_client::PubMedClient;
    ///
    /// let client = PubMedClient::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Errors
    ///
    /// * `PubMedError::RequestError` - If the HTTP client cannot be built
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
    /// let client = PubMedClient::with_config(config).unwrap();
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// Create a PubMed client around an existing reqwest client
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search PubMed and return matching PMIDs in relevance order
    ///
    /// # Arguments
    ///
    /// * `query` - Search query string (PubMed syntax, e.g. `cancer AND Pfizer`)
    /// * `limit` - Maximum number of PMIDs to return
    ///
    /// # Errors
    ///
    /// * `PubMedError::SearchLimitExceeded` - If `limit` exceeds [`MAX_RETRIEVABLE`]
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::ApiError` - If NCBI answers with an error status or an `ERROR` field
    /// * `PubMedError::JsonError` - If the response is not valid ESearch JSON
    ///
    /// # Example
    ///
    /// ```no_run
    /// use papers_client::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     let pmids = client.search_articles("cancer AND Pfizer", 10).await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, limit = limit))]
    pub async fn search_articles(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        if limit > MAX_RETRIEVABLE {
            return Err(PubMedError::SearchLimitExceeded {
                requested: limit,
                maximum: MAX_RETRIEVABLE,
            });
        }

        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(query),
            limit
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let body = response.text().await?;
        let search_result: ESearchResult = serde_json::from_str(&body)?;

        // NCBI sometimes returns 200 OK with an ERROR field
        if let Some(error_msg) = search_result.esearchresult.error {
            return Err(PubMedError::ApiError {
                status: 200,
                message: format!("NCBI ESearch API error: {}", error_msg),
            });
        }

        if let Some(translation) = &search_result.esearchresult.querytranslation {
            debug!(translation = %translation, "PubMed query translation");
        }

        let pmids = search_result.esearchresult.idlist;
        info!(
            results_found = pmids.len(),
            total_count = search_result.esearchresult.count.as_deref().unwrap_or("0"),
            "Search completed successfully"
        );

        Ok(pmids)
    }

    /// Fetch MEDLINE records for the given PMIDs in a single EFetch request
    ///
    /// All PMIDs are validated before any request is made. Records come back
    /// in the order NCBI returns them.
    ///
    /// # Errors
    ///
    /// * `PubMedError::InvalidPmid` - If any PMID is malformed
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::ApiError` - If NCBI answers with an error status
    ///
    /// # Example
    ///
    /// ```no_run
    /// use papers_client::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     let records = client.fetch_medline(&["31978945", "33515491"]).await?;
    ///     for record in &records {
    ///         println!("{:?}: {:?}", record.pmid, record.title);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, pmids), fields(pmids_count = pmids.len()))]
    pub async fn fetch_medline<S: AsRef<str>>(&self, pmids: &[S]) -> Result<Vec<ArticleRecord>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let validated = pmids
            .iter()
            .map(|pmid| PubMedId::parse(pmid.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let id_list = validated
            .iter()
            .map(PubMedId::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&rettype=medline&retmode=text",
            self.base_url, id_list
        );

        debug!("Making EFetch API request");
        let response = self.make_request(&url).await?;
        let medline_text = response.text().await?;

        let records = parse_medline(&medline_text);
        info!(
            requested = validated.len(),
            parsed = records.len(),
            "Fetch completed"
        );

        Ok(records)
    }

    /// Send a GET request with the configured identification parameters
    async fn make_request(&self, url: &str) -> Result<Response> {
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

        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(PubMedError::ApiError {
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
}

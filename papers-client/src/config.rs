//! Client configuration for NCBI E-utilities requests

use std::time::Duration;

/// Default E-utilities endpoint
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default tool name reported to NCBI
pub const DEFAULT_TOOL: &str = "get-papers-list";

/// Settings shared by every request a [`PubMedClient`](crate::PubMedClient) makes
///
/// NCBI asks callers to identify themselves with `tool` and `email`
/// parameters. The email is always supplied by the caller; there is no
/// built-in contact address.
///
/// # Example
///
/// ```
/// use papers_client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_api_key("your_api_key_here")
///     .with_email("researcher@example.com")
///     .with_timeout_seconds(60);
///
/// assert_eq!(config.build_api_params().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// NCBI API key
    pub api_key: Option<String>,
    /// Contact email sent with every request
    pub email: Option<String>,
    /// Tool name sent with every request
    pub tool: Option<String>,
    /// Override for the E-utilities base URL (used by tests)
    pub base_url: Option<String>,
    /// Override for the HTTP user agent
    pub user_agent: Option<String>,
    /// HTTP request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            api_key: None,
            email: None,
            tool: None,
            base_url: None,
            user_agent: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_seconds(self, seconds: u64) -> Self {
        self.with_timeout(Duration::from_secs(seconds))
    }

    /// Base URL with any trailing slash removed
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("papers-client/{}", env!("CARGO_PKG_VERSION")))
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    /// Query parameters identifying the caller to NCBI
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(ref api_key) = self.api_key {
            params.push(("api_key".to_string(), api_key.clone()));
        }
        if let Some(ref email) = self.email {
            params.push(("email".to_string(), email.clone()));
        }
        params.push(("tool".to_string(), self.effective_tool().to_string()));

        params
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

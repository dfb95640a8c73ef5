//! SearXNG HTTP client
//!
//! One client is built at startup and shared by every call. It holds the
//! pooled `reqwest::Client` and the resolved `/search` endpoint; nothing in
//! it changes after construction.
//! See: https://docs.searxng.org/dev/search_api.html

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::SearxngError;
use crate::params::SearchParams;

/// Time allowed for one search, connection through body
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("searxng-mcp/", env!("CARGO_PKG_VERSION"));

/// Client bound to one SearXNG instance
#[derive(Debug, Clone)]
pub struct SearxngClient {
    http: Client,
    base_url: String,
    search_url: String,
}

impl SearxngClient {
    /// Client for `base_url` with the standard 30 second timeout
    pub fn new(base_url: &str) -> Result<Self, SearxngError> {
        Self::with_timeout(base_url, SEARCH_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, SearxngError> {
        let parsed = Url::parse(base_url).map_err(|e| SearxngError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SearxngError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(SearxngError::ClientBuild)?;

        // Appending keeps any path prefix the instance is mounted under
        let base_url = base_url.trim_end_matches('/').to_string();
        let search_url = format!("{}/search", base_url);

        Ok(Self {
            http,
            base_url,
            search_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Run one search and return the response body untouched
    pub async fn search(&self, params: &SearchParams) -> Result<String, SearxngError> {
        let query = params.to_query();
        tracing::debug!(url = %self.search_url, ?query, "GET SearXNG search");

        let response = self
            .http
            .get(&self.search_url)
            .query(&query)
            .send()
            .await
            .map_err(SearxngError::Request)?;

        let status = response.status();
        let response = response
            .error_for_status()
            .map_err(|source| SearxngError::Status { status, source })?;

        let body = response.text().await.map_err(SearxngError::Body)?;
        tracing::debug!(%status, bytes = body.len(), "SearXNG responded");

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_appends_path() {
        let client = SearxngClient::new("http://172.17.0.1:32768").unwrap();
        assert_eq!(client.search_url(), "http://172.17.0.1:32768/search");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = SearxngClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.search_url(), "http://localhost:8080/search");
    }

    #[test]
    fn test_path_prefix_kept() {
        let client = SearxngClient::new("https://example.com/searx").unwrap();
        assert_eq!(client.search_url(), "https://example.com/searx/search");
    }

    #[test]
    fn test_relative_url_rejected() {
        let err = SearxngClient::new("localhost").unwrap_err();
        assert!(matches!(err, SearxngError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let err = SearxngClient::new("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }
}

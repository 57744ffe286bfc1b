//! apibay search backend implementation.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::SearchConfig;

use super::decode::decode_results;
use super::{SearchError, Searcher, TorrentResult};

/// Search backend backed by the apibay `q.php` endpoint.
pub struct ApibaySearcher {
    client: Client,
    config: SearchConfig,
}

impl ApibaySearcher {
    /// Create a new searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Build the search URL for a query.
    fn build_search_url(&self, query: &str) -> String {
        format!(
            "{}?q={}",
            self.config.endpoint.trim_end_matches('/'),
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl Searcher for ApibaySearcher {
    fn name(&self) -> &str {
        "apibay"
    }

    async fn search(&self, query: &str) -> Result<Vec<TorrentResult>, SearchError> {
        let url = self.build_search_url(query);
        debug!(query = %query, "Searching apibay");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::Network(format!("HTTP {}", response.status())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;
        if body.is_empty() {
            return Err(SearchError::EmptyBody);
        }

        let results = decode_results(&body)?;
        debug!(query = %query, results = results.len(), "apibay search complete");

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_url_percent_encodes_query() {
        let searcher = ApibaySearcher::new(SearchConfig::default());
        let url = searcher.build_search_url("the matrix & reloaded");

        assert!(url.starts_with("https://apibay.org/q.php?q="));
        assert!(url.contains("q=the%20matrix%20%26%20reloaded"));
    }

    #[test]
    fn test_build_search_url_trims_trailing_slash() {
        let config = SearchConfig {
            endpoint: "http://localhost:9090/q.php/".to_string(),
            ..SearchConfig::default()
        };
        let searcher = ApibaySearcher::new(config);

        assert_eq!(
            searcher.build_search_url("x"),
            "http://localhost:9090/q.php?q=x"
        );
    }
}

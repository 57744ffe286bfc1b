//! Mock searcher for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::search::{SearchError, Searcher, TorrentResult};

/// A recorded search for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedSearch {
    /// The query text that was searched.
    pub query: String,
}

/// A query handler that produces results dynamically based on the query.
type QueryHandler = Box<dyn Fn(&str) -> Option<Vec<TorrentResult>> + Send + Sync>;

/// Mock implementation of the Searcher trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable results
/// - Track queries for assertions
/// - Simulate failures and per-query response delays
///
/// # Example
///
/// ```rust,ignore
/// use baywatch_core::testing::{fixtures, MockSearcher};
///
/// let searcher = MockSearcher::new();
/// searcher.set_results(vec![fixtures::result("1", "Abbey Road")]).await;
///
/// let results = searcher.search("abbey").await?;
/// assert_eq!(results.len(), 1);
///
/// let searches = searcher.recorded_searches().await;
/// assert_eq!(searches[0].query, "abbey");
/// ```
pub struct MockSearcher {
    /// Configured results to return.
    results: Arc<RwLock<Vec<TorrentResult>>>,
    /// Recorded search queries.
    searches: Arc<RwLock<Vec<RecordedSearch>>>,
    /// If set, the next search will fail with this error.
    next_error: Arc<RwLock<Option<SearchError>>>,
    /// Per-query response delays, for overlapping-request tests.
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    /// Query handler for dynamic result generation based on query text.
    query_handler: Arc<RwLock<Option<QueryHandler>>>,
}

impl std::fmt::Debug for MockSearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSearcher")
            .field("results", &"<results>")
            .field("searches", &"<searches>")
            .field("next_error", &"<next_error>")
            .field("delays", &"<delays>")
            .field("query_handler", &"<handler>")
            .finish()
    }
}

impl Default for MockSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSearcher {
    /// Create a new mock searcher with empty results.
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(Vec::new())),
            searches: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            delays: Arc::new(RwLock::new(HashMap::new())),
            query_handler: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the results to return for subsequent searches.
    pub async fn set_results(&self, results: Vec<TorrentResult>) {
        *self.results.write().await = results;
    }

    /// Get recorded search queries.
    pub async fn recorded_searches(&self) -> Vec<RecordedSearch> {
        self.searches.read().await.clone()
    }

    /// Get the number of searches performed.
    pub async fn search_count(&self) -> usize {
        self.searches.read().await.len()
    }

    /// Configure the next search to fail with the given error.
    pub async fn set_next_error(&self, error: SearchError) {
        *self.next_error.write().await = Some(error);
    }

    /// Delay the response for a specific query text.
    pub async fn set_query_delay(&self, query: &str, delay: Duration) {
        self.delays.write().await.insert(query.to_string(), delay);
    }

    /// Set a handler that generates results from the query text.
    ///
    /// Return `Some(results)` to override the configured results for that
    /// query, or `None` to fall back to them.
    pub async fn set_query_handler<F>(&self, handler: F)
    where
        F: Fn(&str) -> Option<Vec<TorrentResult>> + Send + Sync + 'static,
    {
        *self.query_handler.write().await = Some(Box::new(handler));
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<SearchError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl Searcher for MockSearcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, query: &str) -> Result<Vec<TorrentResult>, SearchError> {
        // Check for injected error
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        // Record the search
        self.searches.write().await.push(RecordedSearch {
            query: query.to_string(),
        });

        // Simulate a slow response if configured for this query
        let delay = self.delays.read().await.get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        // Check if the query handler provides results
        {
            let handler = self.query_handler.read().await;
            if let Some(ref h) = *handler {
                if let Some(results) = h(query) {
                    return Ok(results);
                }
            }
        }

        Ok(self.results.read().await.clone())
    }
}

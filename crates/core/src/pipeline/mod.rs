//! The query pipeline.
//!
//! Owns the current query text and the published result list. Keystrokes go
//! in through [`QueryPipeline::set_query`]; a trailing-edge debounce timer
//! coalesces them so only the latest text is dispatched once the quiescence
//! window elapses. Responses are decoded by the searcher, ranked, and
//! published wholesale through a watch channel, so observers only ever see
//! complete lists.
//!
//! Requests are throttled at issuance, not completion, so responses can
//! arrive out of order. Each request captures a monotonic counter value at
//! issuance and a completion only publishes while its value is still the
//! latest issued one; stale responses are dropped. In-flight requests are
//! never cancelled, their responses are simply discarded.
//!
//! Fetch and decode failures are logged and absorbed: the previously
//! published list stays in place and nothing propagates to the caller.

mod rank;

pub use rank::RankingPolicy;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::PipelineConfig;
use crate::search::{SearchError, Searcher, TorrentResult};

/// The published result list. Replaced wholesale, never mutated in place.
pub type ResultList = Arc<Vec<TorrentResult>>;

/// Debounced search pipeline over a single searcher.
pub struct QueryPipeline {
    inner: Arc<Inner>,
    /// The single outstanding debounce timer; rescheduled, never stacked.
    timer: Mutex<Option<JoinHandle<()>>>,
}

struct Inner {
    searcher: Arc<dyn Searcher>,
    config: PipelineConfig,
    /// Counter value of the most recently issued request.
    latest_issued: AtomicU64,
    /// Makes the stale check and the publish one critical section.
    publish_lock: Mutex<()>,
    results_tx: watch::Sender<ResultList>,
}

impl QueryPipeline {
    /// Create a pipeline. No request is issued until the first
    /// [`set_query`](Self::set_query) call.
    pub fn new(config: PipelineConfig, searcher: Arc<dyn Searcher>) -> Self {
        let (results_tx, _) = watch::channel(ResultList::default());

        Self {
            inner: Arc::new(Inner {
                searcher,
                config,
                latest_issued: AtomicU64::new(0),
                publish_lock: Mutex::new(()),
                results_tx,
            }),
            timer: Mutex::new(None),
        }
    }

    /// Record the latest query text and reschedule the debounce timer.
    ///
    /// Returns immediately; the request fires only once the quiescence
    /// window elapses with no further call, and then only for the text of
    /// the last call. Must be called from within a tokio runtime.
    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        let inner = Arc::clone(&self.inner);
        let window = Duration::from_millis(inner.config.debounce_ms);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            // Detached so a later keystroke reschedules the timer without
            // cancelling a request already in flight.
            tokio::spawn(dispatch(inner, text));
        });

        let mut slot = self.timer.lock().expect("debounce timer lock poisoned");
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }

    /// The currently published list.
    pub fn results(&self) -> ResultList {
        self.inner.results_tx.borrow().clone()
    }

    /// Subscribe to list replacements.
    pub fn subscribe(&self) -> watch::Receiver<ResultList> {
        self.inner.results_tx.subscribe()
    }
}

impl Drop for QueryPipeline {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.timer.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }
}

/// Issue one request for `text` and publish its results unless superseded.
async fn dispatch(inner: Arc<Inner>, text: String) {
    let seq = inner.latest_issued.fetch_add(1, Ordering::SeqCst) + 1;
    debug!(seq, query = %text, searcher = inner.searcher.name(), "Issuing search request");

    match inner.searcher.search(&text).await {
        Ok(mut results) => {
            inner.config.ranking.apply(&mut results);
            inner.publish(seq, results);
        }
        Err(SearchError::Decode(e)) => {
            warn!(seq, error = %e, body = %e.body, "Discarding undecodable search response");
        }
        Err(e) => {
            // Fail quiet: a broken request leaves the previous list in place.
            debug!(seq, error = %e, "Search request failed");
        }
    }
}

impl Inner {
    fn publish(&self, seq: u64, results: Vec<TorrentResult>) {
        let _guard = self.publish_lock.lock().expect("publish lock poisoned");

        if self.latest_issued.load(Ordering::SeqCst) != seq {
            debug!(seq, "Dropping stale search response");
            return;
        }

        debug!(seq, results = results.len(), "Publishing search results");
        self.results_tx.send_replace(Arc::new(results));
    }
}

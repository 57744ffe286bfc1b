//! Mock URI opener for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::action::UriOpener;

/// Mock implementation of the UriOpener trait that records opened URIs.
#[derive(Debug, Default)]
pub struct MockOpener {
    opened: Arc<RwLock<Vec<String>>>,
}

impl MockOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// URIs handed to the opener, in dispatch order.
    pub async fn opened(&self) -> Vec<String> {
        self.opened.read().await.clone()
    }
}

#[async_trait]
impl UriOpener for MockOpener {
    async fn open_uri(&self, uri: &str) {
        self.opened.write().await.push(uri.to_string());
    }
}

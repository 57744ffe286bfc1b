//! Follow-on actions for selected results.

mod opener;

pub use opener::{SystemOpener, UriOpener};

use std::sync::Arc;

use tracing::debug;

use crate::search::TorrentResult;

/// Build the peer-discovery URI for an info hash.
///
/// Pure string construction; malformed hashes pass through unchanged, the
/// way the upstream API tolerates them.
pub fn magnet_uri(info_hash: &str) -> String {
    format!("magnet:?xt=urn:btih:{}", info_hash)
}

/// Hands selected-result actions to the OS-level opener.
pub struct ActionDispatcher {
    opener: Arc<dyn UriOpener>,
}

impl ActionDispatcher {
    pub fn new(opener: Arc<dyn UriOpener>) -> Self {
        Self { opener }
    }

    /// Open the magnet link for a selected result.
    ///
    /// Fire and forget: no completion signal comes back from the opener.
    pub async fn open_magnet(&self, result: &TorrentResult) {
        let uri = magnet_uri(&result.info_hash);
        debug!(name = %result.name, uri = %uri, "Dispatching magnet link");
        self.opener.open_uri(&uri).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixtures, MockOpener};

    #[test]
    fn test_magnet_uri() {
        assert_eq!(magnet_uri("ABCD1234"), "magnet:?xt=urn:btih:ABCD1234");
    }

    #[test]
    fn test_magnet_uri_passes_malformed_hashes_through() {
        assert_eq!(magnet_uri(""), "magnet:?xt=urn:btih:");
        assert_eq!(
            magnet_uri("not a hash at all"),
            "magnet:?xt=urn:btih:not a hash at all"
        );
    }

    #[tokio::test]
    async fn test_open_magnet_hands_uri_to_opener() {
        let opener = Arc::new(MockOpener::new());
        let dispatcher = ActionDispatcher::new(opener.clone());

        let mut result = fixtures::result("1", "some torrent");
        result.info_hash = "DEADBEEF".to_string();
        dispatcher.open_magnet(&result).await;

        assert_eq!(
            opener.opened().await,
            vec!["magnet:?xt=urn:btih:DEADBEEF".to_string()]
        );
    }
}

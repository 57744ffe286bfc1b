//! Testing utilities and mock implementations.
//!
//! Mock implementations of the external collaborator traits, so the
//! pipeline can be exercised without the network or a desktop environment.

mod mock_opener;
mod mock_searcher;

pub use mock_opener::MockOpener;
pub use mock_searcher::MockSearcher;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::search::{TorrentResult, TrustLevel};

    /// Create a test result with reasonable defaults.
    pub fn result(id: &str, name: &str) -> TorrentResult {
        TorrentResult {
            id: id.to_string(),
            name: name.to_string(),
            seeders: "10".to_string(),
            leechers: "5".to_string(),
            info_hash: format!("hash-{}", id),
            trust: TrustLevel::Member,
            size: "2097152".to_string(),
            imdb: None,
        }
    }

    /// Create a test result with explicit seeder and leecher counts.
    pub fn result_with_counts(
        id: &str,
        name: &str,
        seeders: &str,
        leechers: &str,
    ) -> TorrentResult {
        let mut r = result(id, name);
        r.seeders = seeders.to_string();
        r.leechers = leechers.to_string();
        r
    }
}

//! Types for the torrent search system.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::decode::DecodeError;
use super::size::format_size;

/// Trust classification the tracker assigns to a result's uploader.
///
/// Legacy responses only use `member` and `vip`; `trusted` appears in newer
/// ones and must be accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrustLevel {
    Member,
    Vip,
    Trusted,
}

/// One decoded search hit.
///
/// Counts and size stay textual because the API serves them as JSON strings
/// and tolerates garbage in them; the derived accessors do the parsing.
/// Records are built once per decode and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TorrentResult {
    /// Unique within a result set.
    pub id: String,
    /// Display title.
    pub name: String,
    /// Textual seeder count.
    pub seeders: String,
    /// Textual leecher count.
    pub leechers: String,
    /// Opaque identifier used to build the magnet URI.
    pub info_hash: String,
    /// Uploader trust classification.
    pub trust: TrustLevel,
    /// Textual size in bytes.
    pub size: String,
    /// IMDb title id, when the result has one.
    pub imdb: Option<String>,
}

impl TorrentResult {
    /// Seeder to leecher ratio.
    ///
    /// Zero when either count fails to parse or the leecher count parses to
    /// zero; never infinite, never an error.
    pub fn ratio(&self) -> f64 {
        let seeders: f64 = match self.seeders.parse() {
            Ok(v) => v,
            Err(_) => return 0.0,
        };
        let leechers: f64 = match self.leechers.parse() {
            Ok(v) => v,
            Err(_) => return 0.0,
        };
        if leechers == 0.0 {
            return 0.0;
        }
        seeders / leechers
    }

    /// Human-readable size, `"???"` when the size field is not numeric.
    pub fn size_label(&self) -> String {
        format_size(&self.size)
    }

    /// Whether the result gets the trusted-uploader badge.
    pub fn elevated(&self) -> bool {
        matches!(self.trust, TrustLevel::Vip | TrustLevel::Trusted)
    }

    /// IMDb page for the result, when it carries an IMDb id.
    pub fn preview_url(&self) -> Option<String> {
        self.imdb
            .as_deref()
            .map(|title| format!("https://www.imdb.com/title/{}/", title))
    }
}

/// Errors that can occur while executing a search.
///
/// Both variants are terminal for the current request only: the pipeline
/// logs and absorbs them without touching published state.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    Network(String),

    #[error("Search response had no body")]
    EmptyBody,

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Trait for search backends.
#[async_trait]
pub trait Searcher: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Execute a free-text search and return the decoded records.
    async fn search(&self, query: &str) -> Result<Vec<TorrentResult>, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(seeders: &str, leechers: &str) -> TorrentResult {
        TorrentResult {
            id: "1".to_string(),
            name: "test".to_string(),
            seeders: seeders.to_string(),
            leechers: leechers.to_string(),
            info_hash: "abc".to_string(),
            trust: TrustLevel::Member,
            size: "0".to_string(),
            imdb: None,
        }
    }

    #[test]
    fn test_ratio_exact_division() {
        assert_eq!(result("10", "4").ratio(), 2.5);
        assert_eq!(result("1", "2").ratio(), 0.5);
    }

    #[test]
    fn test_ratio_unparsable_counts() {
        assert_eq!(result("garbage", "4").ratio(), 0.0);
        assert_eq!(result("10", "n/a").ratio(), 0.0);
        assert_eq!(result("", "").ratio(), 0.0);
    }

    #[test]
    fn test_ratio_zero_leechers_is_zero_not_infinite() {
        let ratio = result("10", "0").ratio();
        assert_eq!(ratio, 0.0);
        assert!(ratio.is_finite());
    }

    #[test]
    fn test_elevated_flag() {
        let mut r = result("1", "1");
        assert!(!r.elevated());
        r.trust = TrustLevel::Vip;
        assert!(r.elevated());
        r.trust = TrustLevel::Trusted;
        assert!(r.elevated());
    }

    #[test]
    fn test_preview_url() {
        let mut r = result("1", "1");
        assert_eq!(r.preview_url(), None);
        r.imdb = Some("tt0133093".to_string());
        assert_eq!(
            r.preview_url(),
            Some("https://www.imdb.com/title/tt0133093/".to_string())
        );
    }

    #[test]
    fn test_trust_level_deserialization() {
        assert_eq!(
            serde_json::from_str::<TrustLevel>("\"member\"").unwrap(),
            TrustLevel::Member
        );
        assert_eq!(
            serde_json::from_str::<TrustLevel>("\"vip\"").unwrap(),
            TrustLevel::Vip
        );
        assert_eq!(
            serde_json::from_str::<TrustLevel>("\"trusted\"").unwrap(),
            TrustLevel::Trusted
        );
    }
}

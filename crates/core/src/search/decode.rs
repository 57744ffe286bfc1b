//! Decoding of raw apibay response bodies.
//!
//! The wire format is a JSON array of flat objects with textual fields; the
//! field names are the upstream API contract and are not ours to rename.
//! The API signals "no matches" with a single placeholder element whose id
//! is `"0"`, which is filtered here so it never reaches display.

use serde::Deserialize;
use thiserror::Error;

use super::types::{TorrentResult, TrustLevel};

/// Reserved id value meaning "search returned nothing".
const NO_RESULTS_ID: &str = "0";

/// Malformed or unexpected-shape response body.
///
/// Keeps the raw body so callers can log what the API actually sent.
#[derive(Debug, Error)]
#[error("Failed to decode search response: {message}")]
pub struct DecodeError {
    pub message: String,
    pub body: String,
}

/// Wire shape of one apibay hit.
#[derive(Debug, Deserialize)]
struct ApibayHit {
    id: String,
    name: String,
    leechers: String,
    seeders: String,
    info_hash: String,
    status: TrustLevel,
    size: String,
    #[serde(default)]
    imdb: Option<String>,
}

impl From<ApibayHit> for TorrentResult {
    fn from(hit: ApibayHit) -> Self {
        Self {
            id: hit.id,
            name: hit.name,
            seeders: hit.seeders,
            leechers: hit.leechers,
            info_hash: hit.info_hash,
            trust: hit.status,
            size: hit.size,
            // The API sends an empty string when there is no IMDb id.
            imdb: hit.imdb.filter(|v| !v.is_empty()),
        }
    }
}

/// Decode a response body into result records.
///
/// Structural failure fails the whole call; placeholder "no results"
/// elements are dropped, everything else passes through unmodified.
pub fn decode_results(body: &str) -> Result<Vec<TorrentResult>, DecodeError> {
    let hits: Vec<ApibayHit> = serde_json::from_str(body).map_err(|e| DecodeError {
        message: e.to_string(),
        body: body.to_string(),
    })?;

    Ok(hits
        .into_iter()
        .filter(|hit| hit.id != NO_RESULTS_ID)
        .map(TorrentResult::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit_json(id: &str, name: &str) -> String {
        format!(
            r#"{{"id":"{}","name":"{}","leechers":"3","seeders":"12",
                "info_hash":"ABCD1234","status":"vip","size":"2097152","imdb":"tt0133093"}}"#,
            id, name
        )
    }

    #[test]
    fn test_decode_valid_array() {
        let body = format!("[{},{}]", hit_json("101", "first"), hit_json("102", "second"));
        let results = decode_results(&body).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "first");
        assert_eq!(results[0].info_hash, "ABCD1234");
        assert_eq!(results[0].trust, TrustLevel::Vip);
        assert_eq!(results[0].imdb.as_deref(), Some("tt0133093"));
    }

    #[test]
    fn test_decode_filters_no_results_placeholder() {
        let body = format!("[{}]", hit_json("0", "No results returned"));
        let results = decode_results(&body).unwrap();
        assert!(results.is_empty());

        let body = format!("[{},{}]", hit_json("0", "placeholder"), hit_json("7", "real"));
        let results = decode_results(&body).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "7");
    }

    #[test]
    fn test_decode_missing_imdb_field() {
        let body = r#"[{"id":"1","name":"x","leechers":"0","seeders":"0",
            "info_hash":"h","status":"member","size":"1"}]"#;
        let results = decode_results(body).unwrap();
        assert_eq!(results[0].imdb, None);
    }

    #[test]
    fn test_decode_empty_imdb_means_absent() {
        let body = r#"[{"id":"1","name":"x","leechers":"0","seeders":"0",
            "info_hash":"h","status":"member","size":"1","imdb":""}]"#;
        let results = decode_results(body).unwrap();
        assert_eq!(results[0].imdb, None);
        assert_eq!(results[0].preview_url(), None);
    }

    #[test]
    fn test_decode_garbage_counts_pass_through() {
        let body = r#"[{"id":"1","name":"x","leechers":"none","seeders":"many",
            "info_hash":"h","status":"trusted","size":"big"}]"#;
        let results = decode_results(body).unwrap();
        assert_eq!(results[0].ratio(), 0.0);
        assert_eq!(results[0].size_label(), "???");
    }

    #[test]
    fn test_decode_structural_failure_keeps_body() {
        let body = "<html>rate limited</html>";
        let err = decode_results(body).unwrap_err();
        assert!(!err.message.is_empty());
        assert_eq!(err.body, body);
    }

    #[test]
    fn test_decode_shape_mismatch_fails() {
        // An array of the wrong element shape is a decode failure, not a
        // partial success.
        let err = decode_results(r#"[{"unexpected":"shape"}]"#).unwrap_err();
        assert!(err.body.contains("unexpected"));
    }
}

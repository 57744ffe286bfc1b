use serde::{Deserialize, Serialize};

use crate::pipeline::RankingPolicy;

/// Root configuration.
///
/// Every section has production defaults, so running without a config file
/// is fine.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub opener: OpenerConfig,
}

/// Search backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Search endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "https://apibay.org/q.php".to_string()
}

fn default_timeout() -> u32 {
    30
}

/// Query pipeline configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Quiescence window of the trailing-edge debounce, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Ordering applied to results before they are published.
    #[serde(default)]
    pub ranking: RankingPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            ranking: RankingPolicy::default(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    1000
}

/// External URI opener configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OpenerConfig {
    /// Override for the opener command; defaults to the platform opener.
    #[serde(default)]
    pub command: Option<String>,
}

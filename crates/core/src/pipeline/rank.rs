//! Result ordering policy.
//!
//! Ordering is a display decision layered on top of decode, and it has been
//! flipped on and off across releases, so it stays a single swappable value
//! instead of inline sort calls.

use serde::{Deserialize, Serialize};

use crate::search::TorrentResult;

/// Ordering applied to a decoded result set before it is published.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RankingPolicy {
    /// Highest seeder to leecher ratio first.
    #[default]
    RatioDescending,
    /// Keep the order the API returned.
    Unranked,
}

impl RankingPolicy {
    pub fn apply(&self, results: &mut [TorrentResult]) {
        match self {
            RankingPolicy::RatioDescending => {
                results.sort_by(|a, b| b.ratio().total_cmp(&a.ratio()));
            }
            RankingPolicy::Unranked => {}
        }
    }
}

//! Torrent search against the apibay API.
//!
//! This module provides a `Searcher` trait for issuing free-text searches,
//! the apibay HTTP implementation, and the response decoder that turns raw
//! bodies into `TorrentResult` records.

mod apibay;
mod decode;
mod size;
mod types;

pub use apibay::ApibaySearcher;
pub use decode::{decode_results, DecodeError};
pub use size::format_size;
pub use types::*;

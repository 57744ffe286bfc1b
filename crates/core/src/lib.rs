pub mod action;
pub mod config;
pub mod pipeline;
pub mod search;
pub mod testing;

pub use action::{magnet_uri, ActionDispatcher, SystemOpener, UriOpener};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, OpenerConfig,
    PipelineConfig, SearchConfig,
};
pub use pipeline::{QueryPipeline, RankingPolicy, ResultList};
pub use search::{
    decode_results, format_size, ApibaySearcher, DecodeError, SearchError, Searcher,
    TorrentResult, TrustLevel,
};

mod repl;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use baywatch_core::{
    load_config, validate_config, ActionDispatcher, ApibaySearcher, Config, QueryPipeline,
    Searcher, SystemOpener,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Logs go to stderr so they do not interleave with rendered results.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine config path; a missing file just means defaults.
    let config_path = std::env::var("BAYWATCH_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    let config = if config_path.exists() {
        info!("Loading configuration from {:?}", config_path);
        load_config(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        Config::default()
    };

    validate_config(&config).context("Configuration validation failed")?;

    let searcher: Arc<dyn Searcher> = Arc::new(ApibaySearcher::new(config.search.clone()));
    info!("Using searcher: {}", searcher.name());

    let pipeline = QueryPipeline::new(config.pipeline.clone(), searcher);
    let dispatcher = ActionDispatcher::new(Arc::new(SystemOpener::new(config.opener.clone())));

    repl::run(pipeline, dispatcher).await
}

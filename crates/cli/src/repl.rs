//! Line-oriented interactive front end.
//!
//! Every typed line replaces the query text; the pipeline takes care of
//! debouncing and publication. `:N` opens the magnet link for row N of the
//! current list, `:q` quits.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;

use baywatch_core::{ActionDispatcher, QueryPipeline, TorrentResult};

pub async fn run(pipeline: QueryPipeline, dispatcher: ActionDispatcher) -> Result<()> {
    let mut results_rx = pipeline.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("baywatch — type to search, :N to open row N, :q to quit");

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => break,
            changed = results_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let results = results_rx.borrow_and_update().clone();
                render(&results);
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                if line == ":q" {
                    break;
                }
                if let Some(arg) = line.strip_prefix(':') {
                    open_row(&pipeline, &dispatcher, arg).await;
                } else {
                    pipeline.set_query(line);
                }
            }
        }
    }

    Ok(())
}

async fn open_row(pipeline: &QueryPipeline, dispatcher: &ActionDispatcher, arg: &str) {
    let results = pipeline.results();
    match arg.trim().parse::<usize>() {
        Ok(row) if row < results.len() => dispatcher.open_magnet(&results[row]).await,
        _ => eprintln!("no such row: :{}", arg),
    }
}

fn render(results: &[TorrentResult]) {
    if results.is_empty() {
        println!("(no results)");
        return;
    }

    for (row, result) in results.iter().enumerate() {
        println!("{}", format_row(row, result));
    }
}

fn format_row(row: usize, result: &TorrentResult) -> String {
    let badge = if result.elevated() { " *" } else { "" };
    let line = format!(
        "{:>3}  {}{}  ({})  up {} / down {}",
        row,
        result.name,
        badge,
        result.size_label(),
        result.seeders,
        result.leechers,
    );
    match result.preview_url() {
        Some(url) => format!("{}  [{}]", line, url),
        None => line,
    }
}

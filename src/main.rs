//! CLI binary for findwhat.

mod browser;
mod interactive;
mod output;
mod ui;

use anyhow::Context as _;
use clap::Parser;
use colored::Colorize;
use findwhat_search::{ProviderKind, Query, SearchConfig, aggregator};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Findwhat: keyword web search with page previews, from the terminal.
#[derive(Parser)]
#[command(name = "findwhat", version, about)]
struct Cli {
    /// What to search for.
    query: String,

    /// Number of results to request.
    #[arg(short, long, default_value_t = 10)]
    num: usize,

    /// Search engine to query.
    #[arg(long, default_value = "duckduckgo")]
    engine: ProviderKind,

    /// Open every result in the browser once the search completes.
    #[arg(long)]
    auto_open: bool,

    /// Pick results to open from a prompt after the search.
    #[arg(short, long, conflicts_with = "json")]
    interactive: bool,

    /// Save the results to a plain-text file.
    #[arg(short, long)]
    save: bool,

    /// Where --save writes its file.
    #[arg(long, default_value = "search_results.txt")]
    output: PathBuf,

    /// Print the result set as JSON instead of formatted text.
    #[arg(long)]
    json: bool,

    /// Per-page fetch timeout in seconds.
    #[arg(long, default_value_t = 5)]
    timeout: u64,

    /// Number of pages fetched concurrently.
    #[arg(long, default_value_t = 8)]
    concurrency: usize,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            provider: self.engine,
            fetch_timeout_secs: self.timeout,
            concurrency: self.concurrency,
            ..SearchConfig::default()
        }
    }

    fn query(&self) -> Query {
        let mut query = Query::new(self.query.clone(), self.num);
        query.auto_open = self.auto_open;
        query
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Tracing goes to stderr — dependency noise stays off unless RUST_LOG
    // turns it on.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("findwhat=info,findwhat_search=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.search_config();
    let query = cli.query();

    // Handle Ctrl+C: unstarted page fetches resolve as cancelled, the run
    // still completes and prints whatever it has.
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, shutting down...");
            cancel_clone.cancel();
        }
    });

    if cli.json {
        run_json(&cli, &query, &config, cancel).await
    } else {
        run_formatted(&cli, &query, &config, cancel).await
    }
}

/// The default human-readable run: banner, phases, formatted result blocks.
async fn run_formatted(
    cli: &Cli,
    query: &Query,
    config: &SearchConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let width = ui::terminal_width();
    println!("{}", ui::banner(width));
    println!("{}", ui::section("Dive into the Internet", width));
    println!(
        "{}",
        format!("🔍 Searching: \"{}\"", query.text).cyan().bold()
    );

    let spinner = ui::spinner(format!("Collecting results from {}...", config.provider.name()));
    let hits = findwhat_search::search(query, config).await;
    spinner.finish_and_clear();
    let hits = hits?;

    if hits.is_empty() {
        println!("{}", "❌ No results found.".yellow());
        return Ok(());
    }
    println!(
        "{}",
        format!("✅ Found {} search results", hits.len()).green()
    );

    let spinner = ui::spinner("Collecting page previews...".to_owned());
    let results = aggregator::enrich(hits, config, cancel.clone()).await;
    spinner.finish_and_clear();

    println!("{}", ui::section("SEARCH RESULTS", width));
    for result in &results {
        println!("{}", ui::format_result(result, width));
    }

    if cli.save {
        println!("{}", ui::section("SAVING RESULTS", width));
        output::save_plain(&results, &cli.output)
            .with_context(|| format!("failed to write {}", cli.output.display()))?;
        println!(
            "{}",
            format!("💾 Results saved to {}", cli.output.display()).green()
        );
    }

    if cli.interactive {
        println!("{}", ui::section("INTERACTIVE MODE", width));
        interactive::run_loop(&results)?;
    } else if query.auto_open {
        browser::open_all(&results, &cancel, false).await;
    }

    println!("{}", ui::footer(width));
    Ok(())
}

/// The `--json` run: nothing but the result set document on stdout.
async fn run_json(
    cli: &Cli,
    query: &Query,
    config: &SearchConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let hits = findwhat_search::search(query, config).await?;
    let results = aggregator::enrich(hits, config, cancel.clone()).await;
    println!("{}", output::to_json(&results)?);

    if cli.save {
        output::save_plain(&results, &cli.output)
            .with_context(|| format!("failed to write {}", cli.output.display()))?;
        info!(path = %cli.output.display(), "results saved");
    }
    if query.auto_open {
        browser::open_all(&results, &cancel, true).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_behaviour() {
        let cli = Cli::try_parse_from(["findwhat", "rust async"]).unwrap();
        assert_eq!(cli.query, "rust async");
        assert_eq!(cli.num, 10);
        assert_eq!(cli.engine, ProviderKind::DuckDuckGo);
        assert_eq!(cli.timeout, 5);
        assert_eq!(cli.concurrency, 8);
        assert_eq!(cli.output, PathBuf::from("search_results.txt"));
        assert!(!cli.auto_open && !cli.interactive && !cli.save && !cli.json);
    }

    #[test]
    fn flags_and_engine_parse() {
        let cli = Cli::try_parse_from([
            "findwhat",
            "--engine",
            "bing",
            "--num",
            "3",
            "--save",
            "--output",
            "out.txt",
            "--auto-open",
            "tokio select",
        ])
        .unwrap();
        assert_eq!(cli.engine, ProviderKind::Bing);
        assert_eq!(cli.num, 3);
        assert!(cli.save && cli.auto_open);
        assert_eq!(cli.output, PathBuf::from("out.txt"));
    }

    #[test]
    fn unknown_engine_is_rejected() {
        let err = Cli::try_parse_from(["findwhat", "--engine", "altavista", "q"]);
        assert!(err.is_err());
    }

    #[test]
    fn json_conflicts_with_interactive() {
        let err = Cli::try_parse_from(["findwhat", "--json", "--interactive", "q"]);
        assert!(err.is_err());
    }

    #[test]
    fn cli_builds_config_and_query() {
        let cli =
            Cli::try_parse_from(["findwhat", "--timeout", "2", "--concurrency", "4", "q"]).unwrap();
        let config = cli.search_config();
        assert_eq!(config.fetch_timeout_secs, 2);
        assert_eq!(config.concurrency, 4);
        // Untouched fields keep their defaults.
        assert_eq!(config.search_timeout_secs, SearchConfig::default().search_timeout_secs);

        let query = cli.query();
        assert_eq!(query.count, 10);
        assert!(!query.auto_open);
    }

    #[test]
    fn auto_open_flag_lands_in_query() {
        // The run functions branch on the query's hint, not the raw flag,
        // so the flag has to survive the Cli -> Query hop.
        let cli = Cli::try_parse_from(["findwhat", "--auto-open", "q"]).unwrap();
        assert!(cli.query().auto_open);

        let cli = Cli::try_parse_from(["findwhat", "q"]).unwrap();
        assert!(!cli.query().auto_open);
    }
}

//! # findwhat-search
//!
//! Web search with per-result page-metadata enrichment.
//!
//! This crate turns a keyword query into a rank-ordered set of results,
//! each carrying the page's title and a short description scraped from the
//! page itself — no API keys, no external services. It compiles into the
//! `findwhat` binary as a library dependency.
//!
//! ## Design
//!
//! - Scrapes DuckDuckGo (default) or Bing using CSS selectors on HTML
//! - Fetches every result page concurrently through a bounded pool
//! - Extracts the `<title>` and the first two paragraphs as a description
//! - Graceful degradation: a page that fails to fetch or parse keeps its
//!   slot with placeholder metadata; results are never dropped
//! - One fallible stage: only an unreachable search engine aborts a run
//!
//! ## Security
//!
//! - Talks to public search pages only; no credentials anywhere
//! - Purely a client — nothing here listens on a socket
//! - Queries appear in logs at trace level and nowhere else
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() -> findwhat_search::Result<()> {
//! use tokio_util::sync::CancellationToken;
//!
//! let query = findwhat_search::Query::new("rust programming", 5);
//! let config = findwhat_search::SearchConfig::default();
//! let results = findwhat_search::run(&query, &config, CancellationToken::new()).await?;
//! for result in &results {
//!     println!("{}. {} - {}", result.rank, result.title, result.url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod http;
pub mod provider;
pub mod providers;
pub mod types;

pub use aggregator::CANCELLED_REASON;
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use provider::SearchProvider;
pub use types::{
    EnrichedResult, FetchedPage, PageMetadata, ProviderKind, Query, ResultSet, ResultStatus,
    SearchHit, FAILED_TITLE, NO_DESCRIPTION, NO_TITLE,
};

use providers::{BingProvider, DuckDuckGoProvider};
use tokio_util::sync::CancellationToken;

/// Search, then enrich every hit with page metadata.
///
/// This is the whole pipeline: issue the search through the configured
/// engine, fetch every result page through a bounded pool, extract title
/// and description, and return one [`EnrichedResult`] per hit in rank
/// order. Per-page failures degrade the affected result to placeholders.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid configuration or a zero
/// `query.count`, and [`SearchError::SearchUnavailable`] when the search
/// engine itself cannot produce a result list. Nothing else fails the run:
/// zero hits give an empty set, and page-level problems are recorded on
/// the affected results.
pub async fn run(
    query: &Query,
    config: &SearchConfig,
    cancel: CancellationToken,
) -> Result<ResultSet> {
    let hits = search(query, config).await?;
    Ok(aggregator::enrich(hits, config, cancel).await)
}

/// Run the full pipeline with a caller-supplied engine backend.
///
/// Same contract as [`run`], dispatching to `provider` instead of the
/// engine named in `config.provider`.
pub async fn run_with(
    provider: &impl SearchProvider,
    query: &Query,
    config: &SearchConfig,
    cancel: CancellationToken,
) -> Result<ResultSet> {
    let hits = search_with(provider, query, config).await?;
    Ok(aggregator::enrich(hits, config, cancel).await)
}

/// Issue the search only, returning ranked hits without fetching pages.
///
/// # Errors
///
/// Same as [`run`].
pub async fn search(query: &Query, config: &SearchConfig) -> Result<Vec<SearchHit>> {
    match config.provider {
        ProviderKind::DuckDuckGo => search_with(&DuckDuckGoProvider, query, config).await,
        ProviderKind::Bing => search_with(&BingProvider, query, config).await,
    }
}

/// Issue the search through a caller-supplied engine backend.
///
/// Validates the configuration and query, then wraps any engine failure
/// into [`SearchError::SearchUnavailable`] — the only error callers of a
/// validated run ever see.
pub async fn search_with(
    provider: &impl SearchProvider,
    query: &Query,
    config: &SearchConfig,
) -> Result<Vec<SearchHit>> {
    config.validate()?;
    if query.count == 0 {
        return Err(SearchError::Config("query count must be greater than 0".into()));
    }

    tracing::trace!(
        query = %query.text,
        count = query.count,
        provider = %provider.kind(),
        "issuing search"
    );

    provider
        .search(query, config)
        .await
        .map_err(|e| SearchError::unavailable(&query.text, &e))
}

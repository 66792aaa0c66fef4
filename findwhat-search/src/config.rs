//! Tunable knobs for a search-and-enrich run.
//!
//! [`SearchConfig`] controls which engine is queried, per-request timeouts,
//! and how many result pages are fetched at once. The defaults are tuned for
//! reliable, polite scraping.

use crate::error::SearchError;
use crate::types::ProviderKind;

/// Configuration for a search-and-enrich run.
///
/// The defaults cover normal use; override individual fields with struct
/// update syntax when a run needs different behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Which search engine to query. One engine per run.
    pub provider: ProviderKind,
    /// HTTP timeout in seconds for the search engine request.
    pub search_timeout_secs: u64,
    /// HTTP timeout in seconds for each result page fetch. Slow pages are
    /// abandoned at this deadline and recorded as failed, with no retry.
    pub fetch_timeout_secs: u64,
    /// How many result pages may be fetched concurrently. `1` degenerates
    /// to sequential fetching.
    pub concurrency: usize,
    /// Whether to request safe search filtering from the engine.
    pub safe_search: bool,
    /// Fixed User-Agent override. Leave as `None` to rotate through the
    /// built-in list of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::DuckDuckGo,
            search_timeout_secs: 8,
            fetch_timeout_secs: 5,
            concurrency: 8,
            safe_search: true,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Check every field for a usable value.
    ///
    /// Rules:
    /// - `search_timeout_secs` must be greater than 0
    /// - `fetch_timeout_secs` must be greater than 0
    /// - `concurrency` must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.search_timeout_secs == 0 {
            return Err(SearchError::Config(
                "search_timeout_secs must be greater than 0".into(),
            ));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(SearchError::Config(
                "fetch_timeout_secs must be greater than 0".into(),
            ));
        }
        if self.concurrency == 0 {
            return Err(SearchError::Config(
                "concurrency must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

//! Error types for the findwhat-search crate.
//!
//! Only [`SearchError::SearchUnavailable`] (and configuration errors caught
//! before any network activity) escape the pipeline. Fetch and extraction
//! failures for individual results are recorded as data on the result itself,
//! never raised as errors.

/// Errors that can occur while running a search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The search engine could not produce a result list for the query.
    /// This is the only failure that aborts an entire run.
    #[error("search unavailable for \"{query}\": {reason}")]
    SearchUnavailable {
        /// The query that was being searched.
        query: String,
        /// Human-readable cause (HTTP failure, blocked response, bad HTML).
        reason: String,
    },

    /// An HTTP request failed (client construction, send, or body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse an HTML response.
    #[error("parse error: {0}")]
    Parse(String),

    /// A configuration value failed validation.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Wrap any provider-stage error into [`SearchError::SearchUnavailable`]
    /// for the given query, preserving the underlying cause in the reason.
    pub fn unavailable(query: &str, cause: &SearchError) -> Self {
        SearchError::SearchUnavailable {
            query: query.to_owned(),
            reason: cause.to_string(),
        }
    }
}

/// Convenience type alias for findwhat-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

//! The seam between the pipeline and concrete search engines.
//!
//! Each engine (DuckDuckGo, Bing) implements [`SearchProvider`] to provide
//! a uniform interface for querying and parsing result lists.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{ProviderKind, Query, SearchHit};

/// A search engine backend the pipeline can drive.
///
/// Implementors scrape a specific engine's HTML response and extract ranked
/// [`SearchHit`] values. Each engine owns its request URL and query
/// encoding, the headers it sends, the CSS selectors it parses with, and
/// any redirect-wrapper unwrapping the engine calls for.
///
/// Implementations return at most `query.count` hits, ranked 1-based in the
/// order the engine presented them. An empty list is a valid outcome, not
/// an error. All implementations must be `Send + Sync`.
pub trait SearchProvider: Send + Sync {
    /// Perform a web search and return ranked hits.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the HTTP request fails, the response
    /// cannot be parsed, or the engine is blocking requests.
    fn search(
        &self,
        query: &Query,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<SearchHit>, SearchError>> + Send;

    /// Returns which [`ProviderKind`] this implementation represents.
    fn kind(&self) -> ProviderKind;
}

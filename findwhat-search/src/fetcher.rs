//! Result page download under a hard per-request deadline.
//!
//! One [`PageFetcher`] is shared across a run; it holds a single
//! [`reqwest::Client`] so connection pooling and cookies carry across
//! fetches. A failed page is an ordinary outcome here, expressed as
//! [`FetchFailure`] data rather than an error that could abort the run.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::{FetchFailure, FetchedPage, SearchHit};

/// Downloads result pages with browser-like headers and a fixed timeout.
pub struct PageFetcher {
    client: reqwest::Client,
    timeout_secs: u64,
}

impl PageFetcher {
    /// Build a fetcher from the run configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = http::build_client(config.fetch_timeout_secs, config.user_agent.as_deref())?;
        Ok(Self {
            client,
            timeout_secs: config.fetch_timeout_secs,
        })
    }

    /// Fetch one result page.
    ///
    /// Success carries the full body text and the `Content-Type` header.
    /// Timeouts, connection problems, non-2xx statuses, and body read
    /// failures all resolve to a [`FetchFailure`] carrying the hit's rank
    /// and URL plus a human-readable reason. No retries.
    pub async fn fetch(&self, hit: &SearchHit) -> Result<FetchedPage, FetchFailure> {
        tracing::trace!(rank = hit.rank, url = %hit.url, "fetching result page");

        let response = self
            .client
            .get(&hit.url)
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| self.failure(hit, &e))?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await.map_err(|e| self.failure(hit, &e))?;

        tracing::trace!(rank = hit.rank, bytes = body.len(), "result page fetched");

        Ok(FetchedPage {
            rank: hit.rank,
            url: hit.url.clone(),
            body,
            content_type,
        })
    }

    fn failure(&self, hit: &SearchHit, error: &reqwest::Error) -> FetchFailure {
        FetchFailure {
            rank: hit.rank,
            url: hit.url.clone(),
            reason: self.describe(error),
        }
    }

    /// Map a [`reqwest::Error`] to a short human-readable cause.
    fn describe(&self, error: &reqwest::Error) -> String {
        if error.is_timeout() {
            format!("request timed out after {}s", self.timeout_secs)
        } else if let Some(status) = error.status() {
            format!("HTTP status {status}")
        } else if error.is_connect() {
            format!("connection failed: {error}")
        } else if error.is_body() || error.is_decode() {
            format!("body read failed: {error}")
        } else {
            error.to_string()
        }
    }
}

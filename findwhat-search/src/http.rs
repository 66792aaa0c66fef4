//! Shared HTTP client with User-Agent rotation.
//!
//! Every outbound request — the search engine query and each result page
//! fetch — goes through a [`reqwest::Client`] built here. The clients carry
//! browser-like headers, an in-memory cookie store, and a User-Agent drawn
//! from a rotation list; some sites refuse plainly-identified clients
//! outright.

use crate::error::SearchError;
use rand::seq::SliceRandom;
use std::time::Duration;

/// Realistic browser User-Agent strings, rotated per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:139.0) Gecko/20100101 Firefox/139.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:139.0) Gecko/20100101 Firefox/139.0",
];

/// Build a [`reqwest::Client`] for scraping.
///
/// The client gets an in-memory cookie store (consent interstitials, bot
/// checks), the given request timeout, brotli and gzip decompression, and a
/// rotated User-Agent unless `user_agent` overrides it.
///
/// # Errors
///
/// Returns [`SearchError::Http`] when client construction fails.
pub fn build_client(
    timeout_secs: u64,
    user_agent: Option<&str>,
) -> Result<reqwest::Client, SearchError> {
    let ua = match user_agent {
        Some(custom) => custom.to_owned(),
        None => random_user_agent().to_owned(),
    };

    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("client construction failed: {e}")))
}

/// Pick one of the built-in User-Agent strings at random.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // The list is a non-empty const; `choose` returns None only for empty slices.
        .unwrap_or(USER_AGENTS[0])
}

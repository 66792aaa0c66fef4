//! DuckDuckGo search — most scraper-friendly, the default engine.
//!
//! Talks to the JavaScript-free endpoint at `https://html.duckduckgo.com/html/`,
//! which serves plain anchors and tolerates automated clients.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::SearchProvider;
use crate::types::{ProviderKind, Query, SearchHit};
use scraper::{Html, Selector};
use url::Url;

/// DuckDuckGo HTML search scraper.
///
/// Uses a POST request to the HTML-only endpoint which requires no
/// JavaScript. Result anchors arrive wrapped in a redirect URL that must
/// be unwrapped before the hit is usable.
pub struct DuckDuckGoProvider;

impl DuckDuckGoProvider {
    /// Recover the destination URL from an anchor href.
    ///
    /// Organic anchors usually point at
    /// `//duckduckgo.com/l/?uddg=<percent-encoded destination>&rut=...`;
    /// the destination lives in the `uddg` parameter. Anchors that are not
    /// redirect-wrapped pass through unchanged.
    fn extract_url(href: &str) -> Option<String> {
        // Hrefs come protocol-relative; Url::parse needs a scheme.
        let full_href = if href.starts_with("//") {
            format!("https:{href}")
        } else {
            href.to_string()
        };

        let parsed = Url::parse(&full_href).ok()?;

        if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        } else {
            Some(full_href)
        }
    }
}

impl SearchProvider for DuckDuckGoProvider {
    async fn search(
        &self,
        query: &Query,
        config: &SearchConfig,
    ) -> Result<Vec<SearchHit>, SearchError> {
        tracing::trace!(query = %query.text, "DuckDuckGo search");

        let client = http::build_client(config.search_timeout_secs, config.user_agent.as_deref())?;

        let mut params = vec![("q", query.text.as_str())];
        if config.safe_search {
            params.push(("kp", "1"));
        }

        let response = client
            .post("https://html.duckduckgo.com/html/")
            .form(&params)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("request to DuckDuckGo failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("DuckDuckGo returned an error status: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("failed reading DuckDuckGo response body: {e}")))?;

        tracing::trace!(bytes = html.len(), "DuckDuckGo page received");

        parse_duckduckgo_hits(&html, query.count)
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::DuckDuckGo
    }
}

/// Turn a DuckDuckGo results page into ranked hits, at most `count` of them.
///
/// Kept separate from the request path so it can be unit-tested against
/// canned HTML. Ranks are 1-based and follow presentation order; sponsored
/// containers are excluded before ranking so ranks stay contiguous.
pub(crate) fn parse_duckduckgo_hits(html: &str, count: usize) -> Result<Vec<SearchHit>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse(
        ".result.results_links.results_links_deep:not(.result--ad), .web-result:not(.result--ad)",
    )
    .map_err(|e| SearchError::Parse(format!("result selector did not parse: {e:?}")))?;
    let link_sel = Selector::parse(".result__a")
        .map_err(|e| SearchError::Parse(format!("link selector did not parse: {e:?}")))?;

    let mut hits = Vec::new();

    for element in document.select(&result_sel) {
        let anchor = match element.select(&link_sel).next() {
            Some(el) => el,
            None => continue,
        };

        let href = match anchor.value().attr("href") {
            Some(h) => h,
            None => continue,
        };

        let url = match DuckDuckGoProvider::extract_url(href) {
            Some(u) => u,
            None => continue,
        };

        hits.push(SearchHit {
            rank: (hits.len() + 1) as u32,
            url,
        });

        if hits.len() >= count {
            break;
        }
    }

    tracing::debug!(count = hits.len(), "DuckDuckGo hits parsed");
    Ok(hits)
}

//! Bing search — decent fallback with Microsoft's index.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::SearchProvider;
use crate::types::{ProviderKind, Query, SearchHit};
use scraper::{Html, Selector};

/// Scraper for Bing's HTML results page.
///
/// Fallback engine drawing on a different index from DuckDuckGo's sources.
/// Result anchors carry plain URLs, no redirect unwrapping needed.
pub struct BingProvider;

impl SearchProvider for BingProvider {
    async fn search(
        &self,
        query: &Query,
        config: &SearchConfig,
    ) -> Result<Vec<SearchHit>, SearchError> {
        tracing::trace!(query = %query.text, "Bing search");

        let client = http::build_client(config.search_timeout_secs, config.user_agent.as_deref())?;

        let safesearch_val = if config.safe_search { "Strict" } else { "Off" };

        let response = client
            .get("https://www.bing.com/search")
            .query(&[
                ("q", query.text.as_str()),
                ("setlang", "en"),
                ("safeSearch", safesearch_val),
            ])
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("request to Bing failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Bing returned an error status: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("failed reading Bing response body: {e}")))?;

        tracing::trace!(bytes = html.len(), "Bing page received");

        parse_bing_hits(&html, query.count)
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Bing
    }
}

/// Turn a Bing results page into ranked hits, at most `count` of them.
///
/// Kept separate from the request path so it can be unit-tested against
/// canned HTML.
fn parse_bing_hits(html: &str, count: usize) -> Result<Vec<SearchHit>, SearchError> {
    let document = Html::parse_document(html);

    // Organic results live in li.b_algo containers; everything else on the
    // page (ads, sidebars, answer boxes) uses other classes.
    let result_sel = Selector::parse("li.b_algo")
        .map_err(|e| SearchError::Parse(format!("result selector did not parse: {e:?}")))?;
    let link_sel = Selector::parse("h2 a")
        .map_err(|e| SearchError::Parse(format!("link selector did not parse: {e:?}")))?;

    let mut hits = Vec::new();

    for element in document.select(&result_sel) {
        let url = element
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_owned);

        let url = match url {
            Some(u) if !u.is_empty() => u,
            _ => continue,
        };

        hits.push(SearchHit {
            rank: (hits.len() + 1) as u32,
            url,
        });

        if hits.len() >= count {
            break;
        }
    }

    tracing::debug!(count = hits.len(), "Bing hits parsed");
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_BING_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<ol id="b_results">
<li class="b_algo">
  <h2><a href="https://www.alltrails.com/us/colorado" h="ID=SERP">Best Trails in Colorado</a></h2>
  <div class="b_caption"><p>Browse the most popular hiking routes.</p></div>
</li>
<li class="b_algo">
  <h2><a href="https://www.nps.gov/romo/planyourvisit/hiking.htm" h="ID=SERP">Hiking - Rocky Mountain National Park</a></h2>
  <div class="b_caption"><p>Trail conditions and safety information.</p></div>
</li>
<li class="b_algo">
  <h2><a href="https://en.wikipedia.org/wiki/Hiking" h="ID=SERP">Hiking - Wikipedia</a></h2>
  <div class="b_caption"><p>Hiking is a long, vigorous walk on trails.</p></div>
</li>
</ol>
</body>
</html>"#;

    #[test]
    fn mock_page_parses_into_ranked_hits() {
        let hits = parse_bing_hits(MOCK_BING_HTML, 10).expect("should parse");
        assert_eq!(hits.len(), 3);

        assert_eq!(hits[0].rank, 1);
        assert_eq!(hits[0].url, "https://www.alltrails.com/us/colorado");

        assert_eq!(hits[1].rank, 2);
        assert_eq!(hits[1].url, "https://www.nps.gov/romo/planyourvisit/hiking.htm");

        assert_eq!(hits[2].rank, 3);
        assert!(hits[2].url.contains("wikipedia.org"));
    }

    #[test]
    fn count_caps_the_hit_list() {
        let hits = parse_bing_hits(MOCK_BING_HTML, 2).expect("should parse");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn page_without_results_parses_empty() {
        let hits = parse_bing_hits("<html><body></body></html>", 10).expect("should parse");
        assert!(hits.is_empty());
    }

    #[test]
    fn result_without_anchor_skipped() {
        let html = r#"<html><body><ol>
            <li class="b_algo"><h2>No anchor here</h2></li>
            <li class="b_algo"><h2><a href="https://kept.example.com">Kept</a></h2></li>
        </ol></body></html>"#;
        let hits = parse_bing_hits(html, 10).expect("should parse");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].rank, 1);
        assert_eq!(hits[0].url, "https://kept.example.com");
    }

    #[test]
    fn kind_is_bing() {
        let provider = BingProvider;
        assert_eq!(provider.kind(), ProviderKind::Bing);
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BingProvider>();
    }

    #[tokio::test]
    #[ignore] // Live test — run with `cargo test -- --ignored`
    async fn live_bing_returns_hits() {
        let provider = BingProvider;
        let config = SearchConfig::default();
        let hits = provider
            .search(&Query::new("hiking trails", 5), &config)
            .await
            .expect("live search should work");
        assert!(!hits.is_empty());
        assert!(hits.len() <= 5);
    }
}

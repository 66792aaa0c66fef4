//! Core types for search hits, enriched results, and engine identification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder title for pages with no `<title>` element.
pub const NO_TITLE: &str = "(No title)";

/// Placeholder description for pages with no usable paragraph text.
pub const NO_DESCRIPTION: &str = "(No description)";

/// Placeholder title for results whose page could not be fetched or parsed.
pub const FAILED_TITLE: &str = "(Failed to retrieve title)";

/// A search request, captured once at the start of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    /// Raw keyword text as supplied by the caller. Never rewritten.
    pub text: String,
    /// Maximum number of results to request from the engine.
    pub count: usize,
    /// Whether the caller intends to open result URLs afterwards.
    /// Presentation hint only; the pipeline never reads it.
    pub auto_open: bool,
}

impl Query {
    /// Build a query with `auto_open` disabled.
    pub fn new(text: impl Into<String>, count: usize) -> Self {
        Self {
            text: text.into(),
            count,
            auto_open: false,
        }
    }
}

/// A single URL returned by a search engine, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// 1-based position in the engine's result order. Assigned at parse
    /// time and never recomputed.
    pub rank: u32,
    /// The result URL, with any engine redirect wrapper already removed.
    pub url: String,
}

/// Raw payload of a successfully fetched result page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    /// Rank of the hit this page belongs to.
    pub rank: u32,
    /// URL the body was fetched from.
    pub url: String,
    /// Full response body as text.
    pub body: String,
    /// Value of the `Content-Type` response header, if present.
    pub content_type: Option<String>,
}

/// A failed page fetch. Data, not a propagated error: one failed page
/// never aborts the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchFailure {
    /// Rank of the hit whose fetch failed.
    pub rank: u32,
    /// The URL that could not be fetched.
    pub url: String,
    /// Human-readable cause (timeout, DNS failure, HTTP status).
    pub reason: String,
}

/// Title and description extracted from a fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Text of the first `<title>` element, kept literally. Pages without
    /// a title element get [`NO_TITLE`].
    pub title: String,
    /// First two paragraph texts, whitespace-normalised and truncated.
    /// Pages without paragraph text get [`NO_DESCRIPTION`].
    pub description: String,
}

/// How an individual result fared during enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    /// Page fetched and metadata extracted.
    Ok,
    /// The page could not be downloaded (timeout, DNS, HTTP error,
    /// or cancellation before the fetch started).
    FetchFailed,
    /// The page downloaded but its HTML could not be processed.
    ExtractFailed,
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ok => "ok",
            Self::FetchFailed => "fetch_failed",
            Self::ExtractFailed => "extract_failed",
        };
        f.write_str(s)
    }
}

/// A search hit with page metadata attached (or placeholders when
/// enrichment failed). Constructed exactly once per rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedResult {
    /// Rank carried through unchanged from the originating [`SearchHit`].
    pub rank: u32,
    /// The result URL.
    pub url: String,
    /// Page title, or a placeholder when enrichment failed.
    pub title: String,
    /// Page description, or `Error: <cause>` when enrichment failed.
    pub description: String,
    /// Outcome of the enrichment attempt.
    pub status: ResultStatus,
}

impl EnrichedResult {
    /// Build a successful result from extracted metadata.
    pub fn from_metadata(rank: u32, url: String, meta: PageMetadata) -> Self {
        Self {
            rank,
            url,
            title: meta.title,
            description: meta.description,
            status: ResultStatus::Ok,
        }
    }

    /// Build a degraded result for a page that could not be fetched.
    pub fn from_fetch_failure(failure: FetchFailure) -> Self {
        Self {
            rank: failure.rank,
            url: failure.url,
            title: FAILED_TITLE.to_owned(),
            description: format!("Error: {}", failure.reason),
            status: ResultStatus::FetchFailed,
        }
    }

    /// Build a degraded result for a page that fetched but failed extraction.
    pub fn from_extract_failure(rank: u32, url: String, reason: &str) -> Self {
        Self {
            rank,
            url,
            title: FAILED_TITLE.to_owned(),
            description: format!("Error: {reason}"),
            status: ResultStatus::ExtractFailed,
        }
    }

    /// True when enrichment produced placeholders instead of page metadata.
    pub fn is_degraded(&self) -> bool {
        self.status != ResultStatus::Ok
    }
}

/// The rank-ordered outcome of a whole run: exactly one entry per hit.
pub type ResultSet = Vec<EnrichedResult>;

/// Search engines that findwhat can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    /// DuckDuckGo — most scraper-friendly, the default.
    DuckDuckGo,
    /// Bing — decent fallback with a different index.
    Bing,
}

impl ProviderKind {
    /// The engine's display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => "DuckDuckGo",
            Self::Bing => "Bing",
        }
    }

    /// Every selectable engine, in default-preference order.
    pub fn all() -> &'static [ProviderKind] {
        &[Self::DuckDuckGo, Self::Bing]
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "duckduckgo" => Ok(Self::DuckDuckGo),
            "bing" => Ok(Self::Bing),
            other => Err(format!(
                "unknown search engine \"{other}\" (expected duckduckgo or bing)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_new_defaults_auto_open_off() {
        let query = Query::new("rust async", 10);
        assert_eq!(query.text, "rust async");
        assert_eq!(query.count, 10);
        assert!(!query.auto_open);
    }

    #[test]
    fn search_hit_construction() {
        let hit = SearchHit {
            rank: 1,
            url: "https://example.com".into(),
        };
        assert_eq!(hit.rank, 1);
        assert_eq!(hit.url, "https://example.com");
    }

    #[test]
    fn enriched_from_metadata_is_ok() {
        let meta = PageMetadata {
            title: "Landing page".into(),
            description: "A page.".into(),
        };
        let result = EnrichedResult::from_metadata(3, "https://example.org".into(), meta);
        assert_eq!(result.rank, 3);
        assert_eq!(result.title, "Landing page");
        assert_eq!(result.status, ResultStatus::Ok);
        assert!(!result.is_degraded());
    }

    #[test]
    fn enriched_from_fetch_failure_uses_placeholders() {
        let failure = FetchFailure {
            rank: 2,
            url: "https://down.example.com".into(),
            reason: "request timed out after 5s".into(),
        };
        let result = EnrichedResult::from_fetch_failure(failure);
        assert_eq!(result.rank, 2);
        assert_eq!(result.title, FAILED_TITLE);
        assert_eq!(result.description, "Error: request timed out after 5s");
        assert_eq!(result.status, ResultStatus::FetchFailed);
        assert!(result.is_degraded());
    }

    #[test]
    fn enriched_from_extract_failure_uses_placeholders() {
        let result = EnrichedResult::from_extract_failure(
            4,
            "https://weird.example.com".into(),
            "title selector did not parse",
        );
        assert_eq!(result.title, FAILED_TITLE);
        assert_eq!(result.description, "Error: title selector did not parse");
        assert_eq!(result.status, ResultStatus::ExtractFailed);
    }

    #[test]
    fn result_status_display() {
        assert_eq!(ResultStatus::Ok.to_string(), "ok");
        assert_eq!(ResultStatus::FetchFailed.to_string(), "fetch_failed");
        assert_eq!(ResultStatus::ExtractFailed.to_string(), "extract_failed");
    }

    #[test]
    fn result_status_serialises_snake_case() {
        let json = serde_json::to_string(&ResultStatus::FetchFailed).expect("serialize");
        assert_eq!(json, "\"fetch_failed\"");
        let decoded: ResultStatus = serde_json::from_str("\"extract_failed\"").expect("deserialize");
        assert_eq!(decoded, ResultStatus::ExtractFailed);
    }

    #[test]
    fn enriched_result_serde_round_trip() {
        let result = EnrichedResult {
            rank: 1,
            url: "https://example.org/start".into(),
            title: "Start here".into(),
            description: "A page.".into(),
            status: ResultStatus::Ok,
        };
        let json = serde_json::to_string(&result).expect("serialize");
        let decoded: EnrichedResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.rank, 1);
        assert_eq!(decoded.url, "https://example.org/start");
    }

    #[test]
    fn provider_kind_display_and_name() {
        assert_eq!(ProviderKind::DuckDuckGo.to_string(), "DuckDuckGo");
        assert_eq!(ProviderKind::Bing.name(), "Bing");
    }

    #[test]
    fn provider_kind_all() {
        let all = ProviderKind::all();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&ProviderKind::DuckDuckGo));
        assert!(all.contains(&ProviderKind::Bing));
    }

    #[test]
    fn provider_kind_from_str() {
        assert_eq!(
            "duckduckgo".parse::<ProviderKind>(),
            Ok(ProviderKind::DuckDuckGo)
        );
        assert_eq!("Bing".parse::<ProviderKind>(), Ok(ProviderKind::Bing));
        assert!("altavista".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn sentinel_values() {
        assert_eq!(NO_TITLE, "(No title)");
        assert_eq!(NO_DESCRIPTION, "(No description)");
        assert_eq!(FAILED_TITLE, "(Failed to retrieve title)");
    }
}

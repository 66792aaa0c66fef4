//! Concrete search engine scrapers.
//!
//! Each module provides a struct implementing [`crate::provider::SearchProvider`]
//! that scrapes a specific engine's HTML results page into ranked hits.

pub mod bing;
pub mod duckduckgo;

pub use bing::BingProvider;
pub use duckduckgo::DuckDuckGoProvider;

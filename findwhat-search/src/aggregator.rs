//! Concurrent enrichment: bounded fan-out, graceful degradation, rank order.
//!
//! Every hit that goes in comes out as exactly one [`EnrichedResult`].
//! Fetch and extraction failures degrade the affected item to placeholder
//! metadata; they never remove it and never abort the run. The final set is
//! sorted by rank, so completion order is invisible to callers.

use crate::config::SearchConfig;
use crate::extract;
use crate::fetcher::PageFetcher;
use crate::types::{EnrichedResult, FetchFailure, ResultSet, SearchHit};
use futures::future::join_all;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

/// Failure reason recorded for hits whose fetch never started because the
/// run was cancelled.
pub const CANCELLED_REASON: &str = "cancelled";

/// Enrich all hits concurrently, at most `config.concurrency` fetches at
/// a time.
///
/// Cancellation stops new fetches promptly: hits still waiting for a pool
/// slot resolve to a fetch failure with [`CANCELLED_REASON`], while fetches
/// already in flight run to completion (or their own timeout) and keep
/// their real outcome. Either way every hit resolves to a definite status.
pub async fn enrich(
    hits: Vec<SearchHit>,
    config: &SearchConfig,
    cancel: CancellationToken,
) -> ResultSet {
    let total = hits.len();

    let fetcher = match PageFetcher::new(config) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            // Without a client nothing can be fetched; degrade every hit
            // rather than dropping the run.
            let reason = err.to_string();
            return hits
                .into_iter()
                .map(|hit| {
                    EnrichedResult::from_fetch_failure(FetchFailure {
                        rank: hit.rank,
                        url: hit.url,
                        reason: reason.clone(),
                    })
                })
                .collect();
        }
    };

    let semaphore = Semaphore::new(config.concurrency);

    let tasks = hits.into_iter().map(|hit| {
        let fetcher = &fetcher;
        let semaphore = &semaphore;
        let cancel = cancel.clone();
        async move {
            let _permit = tokio::select! {
                _ = cancel.cancelled() => return cancelled_result(hit),
                permit = semaphore.acquire() => match permit {
                    Ok(permit) => permit,
                    // The semaphore is never closed; a close behaves like
                    // cancellation.
                    Err(_) => return cancelled_result(hit),
                },
            };
            if cancel.is_cancelled() {
                return cancelled_result(hit);
            }

            enrich_one(fetcher, hit).await
        }
    });

    let mut results: ResultSet = join_all(tasks).await;

    // Completion order depends on page latency; callers see rank order.
    results.sort_by_key(|result| result.rank);

    let degraded = results.iter().filter(|r| r.is_degraded()).count();
    tracing::debug!(total, degraded, "enrichment complete");

    results
}

/// Fetch and extract a single hit, degrading on failure.
async fn enrich_one(fetcher: &PageFetcher, hit: SearchHit) -> EnrichedResult {
    match fetcher.fetch(&hit).await {
        Ok(page) => match extract::extract_metadata(&page.body) {
            Ok(meta) => {
                tracing::debug!(rank = hit.rank, url = %hit.url, "page enriched");
                EnrichedResult::from_metadata(hit.rank, hit.url, meta)
            }
            Err(err) => {
                tracing::warn!(rank = hit.rank, url = %hit.url, error = %err, "extraction failed");
                EnrichedResult::from_extract_failure(hit.rank, hit.url, &err.to_string())
            }
        },
        Err(failure) => {
            tracing::warn!(
                rank = failure.rank,
                url = %failure.url,
                reason = %failure.reason,
                "fetch failed"
            );
            EnrichedResult::from_fetch_failure(failure)
        }
    }
}

fn cancelled_result(hit: SearchHit) -> EnrichedResult {
    EnrichedResult::from_fetch_failure(FetchFailure {
        rank: hit.rank,
        url: hit.url,
        reason: CANCELLED_REASON.to_owned(),
    })
}

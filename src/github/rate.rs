// src/github/rate.rs
// =============================================================================
// Staying under GitHub's search rate limit.
//
// Code search has its own, small quota (about 30 calls per minute). Two simple
// mechanisms keep us under it:
// - Before each repository, poll /rate_limit and sleep until the search
//   quota has more than one call left (no upper bound on the wait)
// - After each search call, pause for a fixed amount of time
//
// Both are plain fixed sleeps, not a backoff algorithm.
// =============================================================================

use std::time::Duration;
use tracing::debug;

use super::types::RateStatus;
use super::GitHubApi;
use crate::error::Result;

/// We go ahead only when strictly more than this many searches remain
pub const MIN_SEARCH_REMAINING: u64 = 1;

/// Fixed pauses used during a run
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    /// Between two /rate_limit polls while the search quota is exhausted
    pub poll_interval: Duration,
    /// After the docs.yml search
    pub after_descriptor_search: Duration,
    /// After the Markdown search
    pub after_markdown_search: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
            after_descriptor_search: Duration::from_secs(2),
            after_markdown_search: Duration::from_secs(3),
        }
    }
}

#[cfg(test)]
impl Pacing {
    pub fn immediate() -> Self {
        Self {
            poll_interval: Duration::ZERO,
            after_descriptor_search: Duration::ZERO,
            after_markdown_search: Duration::ZERO,
        }
    }
}

/// Blocks until the search quota allows another search
///
/// Prints one status line per poll. Returns the search counters from the
/// final poll.
pub async fn wait_for_search_quota<A>(api: &A, poll_interval: Duration) -> Result<RateStatus>
where
    A: GitHubApi + ?Sized,
{
    let mut polls = 0u32;

    loop {
        let search = api.rate_limit().await?.resources.search;
        polls += 1;
        println!("   Search rate remaining: {}", search.remaining);

        if search.remaining > MIN_SEARCH_REMAINING {
            debug!(polls, remaining = search.remaining, "search quota available");
            return Ok(search);
        }

        debug!(reset = search.reset, "search quota exhausted, waiting");
        tokio::time::sleep(poll_interval).await;
    }
}

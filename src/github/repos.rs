// src/github/repos.rs
// =============================================================================
// Enumerating an account's repositories.
//
// Strategy:
// - Page through the listing 100 at a time, starting at page 1
// - Stop on an empty page, or on a short page (the next one would be empty)
// - Then drop archived / private / excluded repositories, keeping API order
//
// Any failed page aborts the whole enumeration. We never return a partial list.
// =============================================================================

use tracing::debug;

use super::{GitHubApi, RepositorySummary};
use crate::error::Result;
use crate::settings::Settings;

/// Page size requested from the listing endpoint (GitHub's maximum)
pub const PER_PAGE: usize = 100;

/// Returns every repository of the configured account that passes the filters
//
// Parameters:
//   api: the GitHub calls (real client or mock)
//   settings: account, private inclusion, skip-archived and exclusions
//
// Returns: Result<Vec<RepositorySummary>>
//   Success: the filtered repositories, in the order the API listed them
//   Error: the first page that failed (nothing is returned in that case)
pub async fn enumerate_repositories<A>(api: &A, settings: &Settings) -> Result<Vec<RepositorySummary>>
where
    A: GitHubApi + ?Sized,
{
    let scope = settings.listing_scope();
    let mut repositories = Vec::new();
    let mut page = 1u32;

    loop {
        let batch = api.list_repositories(&scope, page).await?;
        let count = batch.len();
        debug!(page, count, "fetched repository page");

        repositories.extend(batch);

        // A short page is the last one, saves a request for an empty page

        if count < PER_PAGE {
            break;
        }
        page += 1;
    }

    let total = repositories.len();
    let kept: Vec<RepositorySummary> = repositories
        .into_iter()
        .filter(|repo| settings.accepts(repo))
        .collect();
    debug!(total, kept = kept.len(), "filtered repositories");

    Ok(kept)
}

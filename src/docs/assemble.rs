// src/docs/assemble.rs
// =============================================================================
// Collecting the documentation of a single repository.
//
// Steps:
// 1. Search for docs.yml; if .github/docs.yml is among the hits, fetch and
//    parse it (a missing navigatorName fails the run)
// 2. Search for Markdown files; no hits means nothing to do for this repo
// 3. For every top-level hit, fetch and decode it; keep it only if it is
//    strictly larger than the minimum size, writing it to <output>/<repo>/
// 4. Finish the navigation with a link to the repository (unless the
//    descriptor turns it off)
//
// The fragment is only handed back if at least one file was written.
// =============================================================================

use std::path::Path;
use tracing::{debug, info};

use super::descriptor::DocsDescriptor;
use super::nav::NavigationFragment;
use crate::error::{HarvestError, Result};
use crate::github::{decode_content, GitHubApi, Pacing, RepositorySummary, SearchHit};
use crate::settings::Settings;

/// Fixed location of the descriptor inside a repository
pub const DESCRIPTOR_PATH: &str = ".github/docs.yml";
pub const DESCRIPTOR_QUERY: &str = "filename:docs.yml";
pub const MARKDOWN_QUERY: &str = "extension:md";

/// Fetches .github/docs.yml if the repository has one
//
// Parameters:
//   api: the GitHub calls (real client or mock)
//   repo: the repository to look in
//   pacing: the pause after the search
//
// Returns: Result<Option<DocsDescriptor>>
//   Ok(None): no docs.yml at the fixed path (hits elsewhere don't count)
//   Ok(Some): the parsed descriptor
//   Error: API failure, undecodable YAML, or no navigatorName
pub async fn find_descriptor<A>(
    api: &A,
    repo: &RepositorySummary,
    pacing: &Pacing,
) -> Result<Option<DocsDescriptor>>
where
    A: GitHubApi + ?Sized,
{
    let hits = api.search_code(repo, DESCRIPTOR_QUERY).await?;

    // GitHub rate limiting throws 403 if there's more than 30 searches per minute
    tokio::time::sleep(pacing.after_descriptor_search).await;

    let Some(hit) = hits.iter().find(|hit| hit.path == DESCRIPTOR_PATH) else {
        return Ok(None);
    };

    let encoded = api.file_content(repo, &hit.path).await?;
    let raw = decode_content(&encoded, &hit.path)?;
    DocsDescriptor::parse(&repo.name, &raw).map(Some)
}

/// Downloads the qualifying Markdown files of `repo`
//
// Parameters:
//   api: the GitHub calls (real client or mock)
//   settings: output directory, minimum size, nav prefix and web URL
//   pacing: the pauses after each search
//   repo: the repository to collect
//
// Returns: Result<Option<NavigationFragment>>
//   Ok(Some): the repository's navigation, at least one file written
//   Ok(None): no hits, only nested files, or everything too small
//   Error: any API, decode or write failure (stops the run)
pub async fn collect_repository_docs<A>(
    api: &A,
    settings: &Settings,
    pacing: &Pacing,
    repo: &RepositorySummary,
) -> Result<Option<NavigationFragment>>
where
    A: GitHubApi + ?Sized,
{
    let descriptor = find_descriptor(api, repo, pacing).await?;
    report_descriptor(descriptor.as_ref());

    let hits = api.search_code(repo, MARKDOWN_QUERY).await?;
    tokio::time::sleep(pacing.after_markdown_search).await;

    if hits.is_empty() {
        debug!(repo = %repo.full_name, "no markdown files");
        return Ok(None);
    }

    // The descriptor's navigatorName replaces the repository name
    let label = descriptor
        .as_ref()
        .map_or(repo.name.as_str(), |d| d.navigator_name.as_str());
    let mut fragment = NavigationFragment::new(label);
    let repo_dir = settings.output.join(&repo.name);

    for hit in hits.iter().filter(|hit| is_top_level(&hit.path)) {
        let encoded = api.file_content(repo, &hit.path).await?;
        let body = decode_content(&encoded, &hit.path)?;

        // Strictly larger than the minimum, an exact match is skipped
        if body.len() <= settings.minimum_filesize {
            debug!(path = %hit.path, size = body.len(), "below minimum filesize, skipped");
            continue;
        }

        write_file(&repo_dir, &hit.name, &body).await?;
        println!("   + {} ({} bytes)", hit.path, body.len());

        fragment.push_file(
            &file_label(descriptor.as_ref(), hit),
            &settings.nav_prefix,
            &repo.name,
            &hit.name,
        );
    }

    // No descriptor means the link is always added
    if descriptor.as_ref().map_or(true, |d| d.include_link) {
        fragment.push_link(&repo.web_link(&settings.web_url));
    }

    if fragment.file_count() == 0 {
        info!(repo = %repo.full_name, "no qualifying files");
        return Ok(None);
    }

    Ok(Some(fragment))
}

/// Navigation label for a file
///
/// The descriptor's prettyName when one is registered for the hit's path,
/// the raw file name otherwise.
pub fn file_label(descriptor: Option<&DocsDescriptor>, hit: &SearchHit) -> String {
    descriptor
        .and_then(|d| d.pretty_name_for(&hit.path))
        .unwrap_or(hit.name.as_str())
        .to_string()
}

/// Only files in the repository root are collected
pub fn is_top_level(path: &str) -> bool {
    !path.contains('/')
}

async fn write_file(dir: &Path, name: &str, body: &[u8]) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| HarvestError::io(dir, e))?;

    let target = dir.join(name);
    tokio::fs::write(&target, body)
        .await
        .map_err(|e| HarvestError::io(&target, e))
}

fn report_descriptor(descriptor: Option<&DocsDescriptor>) {
    match descriptor {
        Some(d) => {
            println!("   contains-config: true");
            println!("   navigator-name:  {}", d.navigator_name);
            println!("   category:        {}", d.category);
        }
        None => println!("   contains-config: false"),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is `A: GitHubApi + ?Sized`?
//    - A generic parameter: the function works with any type implementing
//      the trait (the real client, or the mock in tests)
//    - ?Sized also allows trait objects like &dyn GitHubApi
//
// 2. What is `let ... else`?
//    - Like `if let`, but the else branch must leave the function
//    - Handy for "find it or return early" without extra nesting
//
// 3. Why return Option<NavigationFragment>?
//    - None means "nothing to add for this repository", which is normal
//    - Errors are reserved for things that should stop the whole run
// -----------------------------------------------------------------------------

// src/pipeline.rs
// =============================================================================
// One full harvesting run, strictly in order:
//
//   enumerate repositories
//   open mkdocs.yml (header written)
//   for each repository:
//       wait for search quota -> collect docs -> append fragment
//   close mkdocs.yml
//
// The first error stops the run. Files and fragments already written stay
// where they are.
// =============================================================================

use tracing::info;

use crate::docs::collect_repository_docs;
use crate::error::Result;
use crate::github::{enumerate_repositories, wait_for_search_quota, GitHubApi, Pacing};
use crate::mkdocs::MkdocsAppender;
use crate::settings::Settings;

/// Counters printed at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Repositories left after filtering
    pub repositories: usize,
    /// Repositories that got a navigation entry
    pub documented: usize,
    /// Markdown files written to the output directory
    pub files: usize,
}

// Runs the whole harvest for one account
//
// Parameters:
//   api: where GitHub calls go (GitHubClient in main, MockGitHub in tests)
//   settings: validated flags
//   pacing: pauses between calls (Pacing::immediate() in tests)
//
// Returns: Result<RunSummary>
//   Success: counters for the final summary line
//   Error: the first failure; output written so far is kept
pub async fn run<A>(api: &A, settings: &Settings, pacing: Pacing) -> Result<RunSummary>
where
    A: GitHubApi + ?Sized,
{
    let repositories = enumerate_repositories(api, settings).await?;
    println!("📚 Found {} repositories for {}", repositories.len(), settings.account);

    // Opened only after enumeration succeeded, so a bad account or token
    // leaves mkdocs.yml untouched
    let mut appender = MkdocsAppender::open(&settings.mkdocs_config).await?;
    let mut summary = RunSummary {
        repositories: repositories.len(),
        ..Default::default()
    };

    for (index, repo) in repositories.iter().enumerate() {
        println!("\n[{}/{}] {}", index + 1, repositories.len(), repo.full_name);

        // Two searches follow, keep at least one call in reserve
        wait_for_search_quota(api, pacing.poll_interval).await?;

        // None means no qualifying Markdown, so no navigation entry

        if let Some(fragment) = collect_repository_docs(api, settings, &pacing, repo).await? {
            appender.append(&fragment).await?;
            summary.documented += 1;
            summary.files += fragment.file_count();
            info!(repo = %repo.full_name, files = fragment.file_count(), "added to navigation");
        }
    }

    appender.finish().await?;
    Ok(summary)
}

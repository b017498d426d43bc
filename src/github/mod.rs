// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Submodules:
// - types: the JSON shapes we read from the API
// - client: the real HTTP implementation (reqwest)
// - repos: paging through an account's repositories and filtering them
// - rate: waiting for search quota, and the fixed pauses between searches
// - content: decoding the base64 file payloads
//
// Everything else in the app only sees the GitHubApi trait below, so tests
// can swap in a scripted mock instead of hitting the network.
//
// Rust concepts:
// - Traits: an interface that several types can implement
// - async-trait: lets a trait have async methods
// =============================================================================

mod client;
mod content;
mod rate;
mod repos;
mod types;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

use crate::error::Result;

pub use client::GitHubClient;
pub use content::decode_content;
pub use rate::{wait_for_search_quota, Pacing};
pub use repos::enumerate_repositories;
pub use types::{RateLimitResponse, RepositorySummary, SearchHit};

/// Whose repository listing to page through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingScope {
    /// GET /users/{account}/repos - public repositories of a user or org
    Account(String),
    /// GET /user/repos - everything the token's owner can see
    AuthenticatedUser,
}

/// The four GitHub calls a harvesting run needs
///
/// Every method returns an error for transport failures and non-200
/// responses. There are no retries here.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// One page (1-based) of the repository listing
    async fn list_repositories(
        &self,
        scope: &ListingScope,
        page: u32,
    ) -> Result<Vec<RepositorySummary>>;

    /// Current rate limit counters for every category
    async fn rate_limit(&self) -> Result<RateLimitResponse>;

    /// Code search scoped to one repository, e.g. query = "extension:md"
    async fn search_code(&self, repo: &RepositorySummary, query: &str) -> Result<Vec<SearchHit>>;

    /// Base64 content of one file (still encoded, see decode_content)
    async fn file_content(&self, repo: &RepositorySummary, path: &str) -> Result<String>;
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait for four HTTP calls?
//    - The rest of the code is written against GitHubApi, not reqwest
//    - Tests pass a MockGitHub that answers from memory, so pagination, the
//      rate gate and file filtering are tested without network access
//
// 2. Why #[async_trait]?
//    - It rewrites the async methods so the trait can be used generically
//      and as a trait object (&dyn GitHubApi)
//
// 3. What does `Send + Sync` on the trait mean?
//    - Implementations can be shared across threads
//    - #[async_trait] makes the returned futures Send by default, which
//      requires &self to be shareable, hence Sync
// -----------------------------------------------------------------------------

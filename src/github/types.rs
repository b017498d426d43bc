// src/github/types.rs
// =============================================================================
// Data shapes returned by the three GitHub REST endpoints we use, plus the
// rate limit endpoint.
//
// Only the fields we actually read are declared. serde ignores the rest of the
// (very large) payloads. Fields that older API versions omit get
// #[serde(default)] so deserialization doesn't fail on them.
// =============================================================================

use serde::Deserialize;

/// One entry of GET /users/{account}/repos or GET /user/repos
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub clone_url: String,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub archived: bool,
    /// "public", "private" or "internal" (missing on older API versions)
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub private: bool,
}

impl RepositorySummary {
    pub fn is_private(&self) -> bool {
        self.private || self.visibility.as_deref() == Some("private")
    }

    /// Browser URL of the repository
    ///
    /// Prefers what the API reports, falls back to <web_url>/<owner>/<repo>
    pub fn web_link(&self, web_url: &str) -> String {
        match &self.html_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!("{}/{}", web_url.trim_end_matches('/'), self.full_name),
        }
    }
}

/// A file matched by GET /search/code
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    pub name: String,
    /// Path relative to the repository root, e.g. "docs/intro.md"
    pub path: String,
}

/// Envelope of GET /search/code
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<SearchHit>,
}

/// Envelope of GET /repos/{owner}/{repo}/contents/{path}
#[derive(Debug, Clone, Deserialize)]
pub struct FileContent {
    pub name: String,
    pub path: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Base64, wrapped with newlines every 60 characters
    #[serde(default)]
    pub content: String,
}

/// Counters for one rate limit category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RateStatus {
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub remaining: u64,
    /// Unix timestamp when the window resets
    #[serde(default)]
    pub reset: u64,
    #[serde(default)]
    pub used: u64,
}

/// Per-category counters from GET /rate_limit
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RateResources {
    #[serde(default)]
    pub core: RateStatus,
    #[serde(default)]
    pub search: RateStatus,
    #[serde(default)]
    pub graphql: RateStatus,
    #[serde(default)]
    pub code_search: Option<RateStatus>,
}

/// Body of GET /rate_limit
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RateLimitResponse {
    pub resources: RateResources,
    #[serde(default)]
    pub rate: RateStatus,
}

// src/github/mock.rs
// =============================================================================
// A scripted GitHubApi for tests.
//
// Serves canned repository pages, a sequence of search-quota values, search
// hits and file contents, and records every call as a short string
// ("list:2", "rate_limit", "search:acme/widgets:extension:md", ...) so tests
// can assert on what was requested and in which order.
// =============================================================================

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use super::types::{RateLimitResponse, RateResources, RateStatus};
use super::{GitHubApi, ListingScope, RepositorySummary, SearchHit};
use crate::error::{HarvestError, Result};

/// A public, non-archived repository owned by "acme"
pub fn repository(name: &str) -> RepositorySummary {
    RepositorySummary {
        name: name.to_string(),
        full_name: format!("acme/{}", name),
        clone_url: format!("https://github.com/acme/{}.git", name),
        visibility: Some("public".to_string()),
        ..Default::default()
    }
}

/// A search hit; the name is the last path segment
pub fn hit(path: &str) -> SearchHit {
    SearchHit {
        name: path.rsplit('/').next().unwrap_or(path).to_string(),
        path: path.to_string(),
    }
}

#[derive(Default)]
pub struct MockGitHub {
    pages: Vec<Vec<RepositorySummary>>,
    failing_page: Option<u32>,
    search_remaining: Mutex<VecDeque<u64>>,
    searches: HashMap<(String, String), Vec<SearchHit>>,
    files: HashMap<(String, String), String>,
    calls: Mutex<Vec<String>>,
}

impl MockGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the next page of the repository listing
    pub fn with_page(mut self, repos: Vec<RepositorySummary>) -> Self {
        self.pages.push(repos);
        self
    }

    /// Makes the given page answer with HTTP 500
    pub fn failing_page(mut self, page: u32) -> Self {
        self.failing_page = Some(page);
        self
    }

    /// Search quota returned by successive polls; the last value repeats
    pub fn with_search_remaining(self, values: &[u64]) -> Self {
        self.search_remaining
            .lock()
            .unwrap()
            .extend(values.iter().copied());
        self
    }

    pub fn with_search(mut self, full_name: &str, query: &str, hits: Vec<SearchHit>) -> Self {
        self.searches
            .insert((full_name.to_string(), query.to_string()), hits);
        self
    }

    /// Serves `body` base64-encoded, wrapped at 60 columns like GitHub does
    pub fn with_file(mut self, full_name: &str, path: &str, body: &[u8]) -> Self {
        let encoded = STANDARD.encode(body);
        let wrapped: Vec<&str> = encoded
            .as_bytes()
            .chunks(60)
            .map(|chunk| std::str::from_utf8(chunk).unwrap())
            .collect();
        self.files
            .insert((full_name.to_string(), path.to_string()), wrapped.join("\n"));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_matching(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.starts_with(prefix))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl GitHubApi for MockGitHub {
    async fn list_repositories(
        &self,
        _scope: &ListingScope,
        page: u32,
    ) -> Result<Vec<RepositorySummary>> {
        self.record(format!("list:{}", page));

        if self.failing_page == Some(page) {
            return Err(HarvestError::Status {
                status: 500,
                url: format!("mock://repos?page={}", page),
            });
        }

        Ok(self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default())
    }

    async fn rate_limit(&self) -> Result<RateLimitResponse> {
        self.record("rate_limit".to_string());

        let mut queue = self.search_remaining.lock().unwrap();
        let remaining = if queue.len() > 1 {
            queue.pop_front().unwrap_or(5000)
        } else {
            queue.front().copied().unwrap_or(30)
        };

        Ok(RateLimitResponse {
            resources: RateResources {
                search: RateStatus {
                    limit: 30,
                    remaining,
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        })
    }

    async fn search_code(&self, repo: &RepositorySummary, query: &str) -> Result<Vec<SearchHit>> {
        self.record(format!("search:{}:{}", repo.full_name, query));

        Ok(self
            .searches
            .get(&(repo.full_name.clone(), query.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn file_content(&self, repo: &RepositorySummary, path: &str) -> Result<String> {
        self.record(format!("content:{}:{}", repo.full_name, path));

        self.files
            .get(&(repo.full_name.clone(), path.to_string()))
            .cloned()
            .ok_or_else(|| HarvestError::Status {
                status: 404,
                url: format!("mock://{}/contents/{}", repo.full_name, path),
            })
    }
}

// src/github/client.rs
// =============================================================================
// The real GitHubApi implementation, built on reqwest.
//
// Endpoints (relative to the API base URL, https://api.github.com by default):
// - GET users/{account}/repos?per_page=100&page=N   (or user/repos)
// - GET rate_limit
// - GET search/code?q=repo:{owner}/{repo}+{query}
// - GET repos/{owner}/{repo}/contents/{path}
//
// Anything but 200 OK is an error. The token, when we have one, goes on
// every request as a bearer token.
// =============================================================================

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::repos::PER_PAGE;
use super::types::{FileContent, RateLimitResponse, RepositorySummary, SearchHit, SearchResults};
use super::{GitHubApi, ListingScope};
use crate::error::{HarvestError, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    http: Client,
    api_base: Url,
    token: Option<String>,
}

impl GitHubClient {
    // Creates the client used for the whole run
    //
    // Parameters:
    //   api_base: root of the REST API, e.g. https://api.github.com
    //   token: optional token, sent as "Authorization: Bearer <token>"
    //
    // One reqwest Client is reused for every call (connection pooling)
    pub fn new(api_base: Url, token: Option<String>) -> Result<Self> {
        // GitHub refuses requests without a User-Agent
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(HarvestError::ClientBuild)?;

        Ok(Self {
            http,
            api_base,
            token,
        })
    }

    // Appends path segments to the API base
    //
    // Segments are percent-encoded individually, so a file called
    // "my notes.md" ends up as .../my%20notes.md
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| HarvestError::InvalidApiBase {
                url: self.api_base.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // Example: users/acme/repos?page=2&per_page=100
    fn repositories_url(&self, scope: &ListingScope, page: u32) -> Result<Url> {
        let mut url = match scope {
            ListingScope::Account(account) => self.endpoint(["users", account.as_str(), "repos"])?,
            ListingScope::AuthenticatedUser => self.endpoint(["user", "repos"])?,
        };
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &PER_PAGE.to_string());
        Ok(url)
    }

    fn search_url(&self, repo: &RepositorySummary, query: &str) -> Result<Url> {
        let mut url = self.endpoint(["search", "code"])?;
        // Form encoding turns the space into '+', which is what GitHub expects
        // between search qualifiers
        url.query_pairs_mut()
            .append_pair("q", &format!("repo:{} {}", repo.full_name, query));
        Ok(url)
    }

    // Example: repos/acme/widgets/contents/.github/docs.yml
    fn content_url(&self, repo: &RepositorySummary, path: &str) -> Result<Url> {
        let segments = ["repos"]
            .into_iter()
            .chain(repo.full_name.split('/'))
            .chain(["contents"])
            .chain(path.split('/'));
        self.endpoint(segments)
    }

    // Builds a GET request with the GitHub headers
    //
    // Parameters:
    //   url: the full endpoint URL (see endpoint() and the *_url helpers)
    //
    // Returns: a RequestBuilder ready to send
    //
    // The Authorization header is only added when a token was configured.
    // Anonymous requests work for public repositories, with a lower quota.
    fn request(&self, url: Url) -> RequestBuilder {
        let request = self
            .http
            .get(url)
            .header(ACCEPT, "application/vnd.github+json");

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // Sends a GET and parses the JSON body
    //
    // Parameters:
    //   url: the endpoint to call
    //
    // Returns: Result<T>
    //   Success: the body deserialized into T
    //   Error: Transport if no response arrived, Status for anything other
    //          than 200 OK, MalformedBody if the JSON doesn't fit T
    //
    // There is no retry here. Every error ends the run.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");

        let response = self
            .request(url.clone())
            .send()
            .await
            .map_err(|source| HarvestError::Transport {
                url: url.to_string(),
                source,
            })?;

        // Only a plain 200 counts as success (GitHub answers 403 when the
        // search quota is used up, 404 for missing files)
        let status = response.status();
        if status != StatusCode::OK {
            return Err(HarvestError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| HarvestError::MalformedBody {
                url: url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn list_repositories(
        &self,
        scope: &ListingScope,
        page: u32,
    ) -> Result<Vec<RepositorySummary>> {
        let url = self.repositories_url(scope, page)?;
        self.get_json(url).await
    }

    async fn rate_limit(&self) -> Result<RateLimitResponse> {
        let url = self.endpoint(["rate_limit"])?;
        self.get_json(url).await
    }

    async fn search_code(&self, repo: &RepositorySummary, query: &str) -> Result<Vec<SearchHit>> {
        let url = self.search_url(repo, query)?;
        let results: SearchResults = self.get_json(url).await?;
        debug!(repo = %repo.full_name, query, total = results.total_count, "search finished");
        Ok(results.items)
    }

    async fn file_content(&self, repo: &RepositorySummary, path: &str) -> Result<String> {
        let url = self.content_url(repo, path)?;
        let file: FileContent = self.get_json(url).await?;
        debug!(name = %file.name, path = %file.path, kind = %file.kind, "fetched content");
        Ok(file.content)
    }
}

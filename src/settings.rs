// src/settings.rs
// =============================================================================
// Validated, immutable settings for one harvesting run.
//
// Built once from the parsed Cli. Rules:
// - An account is always required
// - A token is required when private repositories are requested
// - The API and web URLs must be absolute http(s) URLs
//
// After this point nothing else touches the command line.
// =============================================================================

use std::path::PathBuf;
use url::Url;

use crate::cli::Cli;
use crate::error::{HarvestError, Result};
use crate::github::{ListingScope, RepositorySummary};

#[derive(Debug, Clone)]
pub struct Settings {
    pub token: Option<String>,
    pub account: String,
    pub skip_archived: bool,
    pub include_private: bool,
    pub exclusions: Vec<String>,
    pub output: PathBuf,
    pub minimum_filesize: usize,
    pub mkdocs_config: PathBuf,
    pub api_url: Url,
    pub web_url: String,
    pub nav_prefix: String,
}

impl Settings {
    /// Validates the parsed command line and turns it into Settings
    ///
    /// Fails before any network activity if required flags are missing.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        // An empty --token "" is the same as no token at all
        let token = cli.token.filter(|t| !t.trim().is_empty());

        if token.is_none() && cli.include_private {
            return Err(HarvestError::TokenRequired);
        }

        let account = cli
            .account
            .filter(|a| !a.trim().is_empty())
            .ok_or(HarvestError::MissingAccount)?;

        let api_url = parse_http_url("api-url", &cli.api_url)?;
        let web_url = parse_http_url("web-url", &cli.web_url)?;

        Ok(Self {
            token,
            account,
            skip_archived: cli.skip_archived,
            include_private: cli.include_private,
            exclusions: parse_exclusions(cli.exclude.as_deref().unwrap_or("")),
            output: cli.output,
            minimum_filesize: cli.minimum_filesize,
            mkdocs_config: cli.mkdocs_config,
            api_url,
            web_url: web_url.as_str().trim_end_matches('/').to_string(),
            nav_prefix: cli.nav_prefix.trim_matches('/').to_string(),
        })
    }

    /// Which repository listing to page through
    ///
    /// Private repositories are only visible through the authenticated
    /// user's listing, so --include-private switches away from the account's
    /// public listing.
    pub fn listing_scope(&self) -> ListingScope {
        if self.include_private {
            ListingScope::AuthenticatedUser
        } else {
            ListingScope::Account(self.account.clone())
        }
    }

    /// Whether a repository survives the archived/private/exclusion filters
    pub fn accepts(&self, repo: &RepositorySummary) -> bool {
        if self.skip_archived && repo.archived {
            return false;
        }
        if !self.include_private && repo.is_private() {
            return false;
        }
        !self.exclusions.iter().any(|name| name == &repo.name)
    }
}

/// Splits "a, b,,c" into ["a", "b", "c"]
pub fn parse_exclusions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

fn parse_http_url(flag: &'static str, value: &str) -> Result<Url> {
    let invalid = || HarvestError::InvalidUrl {
        flag,
        value: value.to_string(),
    };

    let url = Url::parse(value).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
pub(crate) fn test_settings(output: PathBuf, mkdocs_config: PathBuf) -> Settings {
    Settings {
        token: None,
        account: "acme".to_string(),
        skip_archived: false,
        include_private: false,
        exclusions: Vec::new(),
        output,
        minimum_filesize: 300,
        mkdocs_config,
        api_url: Url::parse("https://api.github.com").unwrap(),
        web_url: "https://github.com".to_string(),
        nav_prefix: "github".to_string(),
    }
}

// src/error.rs
// =============================================================================
// Error types for every stage of a harvesting run.
//
// Three families of failure, all fatal for the run:
// - Configuration errors (missing flags, bad URLs) - raised before any network call
// - Transport/API errors (network failure, non-200 status, malformed JSON)
// - Domain errors (a docs.yml that can't be parsed or has no navigatorName)
//
// Each stage returns Result<T> and propagates with `?`. Only main.rs decides
// what to do with the error (print it and exit with a non-zero code).
//
// Rust concepts:
// - thiserror: derive macro that implements std::error::Error for us
// - #[source]: keeps the underlying error so the whole chain can be printed
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a harvesting run.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// --account was not given
    #[error("--account flag is missing")]
    MissingAccount,

    /// --include-private was given without a token
    #[error("--token flag is missing (required with --include-private)")]
    TokenRequired,

    /// A URL flag could not be parsed or is not http(s)
    #[error("invalid URL for --{flag}: {value}")]
    InvalidUrl { flag: &'static str, value: String },

    /// The API base URL cannot have path segments appended to it
    #[error("API base URL cannot be used to build endpoints: {url}")]
    InvalidApiBase { url: String },

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// The request never got a response (DNS, TLS, timeout, ...)
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with something other than 200 OK
    #[error("Statuscode: {status}, {url}")]
    Status { status: u16, url: String },

    /// The response body was not the JSON we expected
    #[error("failed to unmarshal response from {url}")]
    MalformedBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// File content was not valid base64
    #[error("failed to decode content of {path}")]
    Decode {
        path: String,
        #[source]
        source: base64::DecodeError,
    },

    /// .github/docs.yml exists but is not valid YAML for a descriptor
    #[error("invalid docs descriptor in repository {repo}")]
    Descriptor {
        repo: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// .github/docs.yml exists but navigatorName is empty
    #[error("Value of navigatorName attribute for repository {repo} is empty")]
    MissingNavigatorName { repo: String },

    /// Creating directories or writing files failed
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HarvestError {
    /// Helper for wrapping std::io::Error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, HarvestError>;

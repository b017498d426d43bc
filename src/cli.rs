// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There are no subcommands: one invocation performs the whole run.
// clap only maps flags to fields here. Checking that the combination of flags
// makes sense (account present, token present when needed) happens in
// settings.rs so it can be tested without exiting the process.
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates the parsing code
// - Option<T>: flags that may be absent
// - PathBuf: an owned filesystem path
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "docs-harvester",
    version,
    about = "Collect Markdown docs from a GitHub account's repositories into an MkDocs site",
    long_about = "docs-harvester lists every repository of a GitHub user or organization, \
                  downloads the top-level Markdown files of each one and appends a navigation \
                  section for them to your mkdocs.yml. A repository can customize its entry \
                  with a .github/docs.yml file."
)]
pub struct Cli {
    /// The token used to access GitHub (required with --include-private)
    ///
    /// Can also be set with the DOCS_HARVESTER_TOKEN environment variable
    #[arg(long, env = "DOCS_HARVESTER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// The user/organization to target (required)
    #[arg(long)]
    pub account: Option<String>,

    /// Skip archived repositories
    #[arg(long)]
    pub skip_archived: bool,

    /// Include private repositories (lists the authenticated user's repos)
    #[arg(long)]
    pub include_private: bool,

    /// Comma delimited list of repositories to exclude
    ///
    /// Example: --exclude legacy-api,sandbox
    #[arg(long)]
    pub exclude: Option<String>,

    /// Output directory for downloaded files
    #[arg(long, default_value = "docs")]
    pub output: PathBuf,

    /// The minimum filesize to download (byte length)
    ///
    /// Files of exactly this size are skipped, only larger ones are kept
    #[arg(long, default_value_t = 300)]
    pub minimum_filesize: usize,

    /// The MkDocs config file to append the navigation to
    #[arg(long, default_value = "mkdocs.yml")]
    pub mkdocs_config: PathBuf,

    /// Base URL of the GitHub REST API (use https://HOST/api/v3 for GitHub Enterprise)
    #[arg(long, default_value = "https://api.github.com")]
    pub api_url: String,

    /// Base URL for repository links when the API doesn't provide one
    #[arg(long, default_value = "https://github.com")]
    pub web_url: String,

    /// Path prefix used for file entries in the navigation
    #[arg(long, default_value = "github")]
    pub nav_prefix: String,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is `account` an Option if it's required?
//    - If clap enforced it, a missing flag would exit inside Cli::parse()
//    - Keeping it optional lets Settings::from_cli report the problem as a
//      normal error value, which we can unit test
//
// 2. What does `env = "..."` do?
//    - clap falls back to the environment variable when the flag is absent
//    - hide_env_values keeps the token out of --help output
//
// 3. Why PathBuf instead of String for paths?
//    - PathBuf is the owned path type, it handles OS-specific separators
//    - .join() builds child paths without manual string formatting
// -----------------------------------------------------------------------------

// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate them into Settings (fails before any network call)
// 3. Run the harvest: list repos, download docs, append to mkdocs.yml
// 4. Exit with proper code (0 = success, 1 = the run failed)
//
// Every stage below returns a Result. This is the only place that turns an
// error into an exit code.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod docs;      // src/docs/ - descriptor, navigation, per-repo assembly
mod error;     // src/error.rs - HarvestError
mod github;    // src/github/ - GitHub REST API access
mod mkdocs;    // src/mkdocs.rs - appending to mkdocs.yml
mod pipeline;  // src/pipeline.rs - the whole run, repo by repo
mod settings;  // src/settings.rs - validated configuration

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use github::{GitHubClient, Pacing};
use settings::Settings;

// Single-threaded runtime: one request in flight at a time
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole chain: "request to ... failed: dns error"
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::from_cli(cli)?;
    let client = GitHubClient::new(settings.api_url.clone(), settings.token.clone())?;

    println!("🔍 Collecting docs for {}", settings.account);

    let summary = pipeline::run(&client, &settings, Pacing::default())
        .await
        .with_context(|| format!("harvest for {} aborted", settings.account))?;

    println!("\n📊 Summary:");
    println!("   📋 Repositories: {}", summary.repositories);
    println!("   ✅ Documented: {}", summary.documented);
    println!("   📄 Files written: {}", summary.files);
    println!("   📝 Navigation appended to {}", settings.mkdocs_config.display());

    Ok(())
}

// RUST_LOG wins if set, otherwise warnings only (debug with --verbose)
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "docs_harvester=debug"
        } else {
            "docs_harvester=warn"
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

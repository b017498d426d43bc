// src/docs/mod.rs
// =============================================================================
// This module turns search results into files on disk and navigation text.
//
// Submodules:
// - descriptor: the optional .github/docs.yml of a repository
// - nav: formatting the mkdocs.yml navigation fragment
// - assemble: the per-repository pipeline (search, fetch, filter, write)
// =============================================================================

mod assemble;
mod descriptor;
mod nav;

pub use assemble::collect_repository_docs;
pub use nav::NavigationFragment;

// src/mkdocs.rs
// =============================================================================
// Appending navigation to the MkDocs config file.
//
// The file is opened once per run in append mode (created if missing) and a
// single section header is written right away. Each repository's fragment is
// written and flushed as soon as it is ready, so a later failure still leaves
// the earlier repositories in the config.
//
// The file handle lives inside MkdocsAppender. When the appender is dropped
// the file is closed, even on an early return with `?`.
//
// Like the Markdown downloads in docs/assemble.rs, all file I/O goes through
// tokio::fs so nothing blocks the runtime thread.
// =============================================================================

use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::docs::NavigationFragment;
use crate::error::{HarvestError, Result};

/// Written once at the start of every run
pub const SECTION_HEADER: &str = "\n  - '<b>GitHub</b>':\n";

pub struct MkdocsAppender {
    path: PathBuf,
    file: File,
}

impl MkdocsAppender {
    // Opens (or creates) the config file and writes the section header
    //
    // Parameters:
    //   path: the mkdocs.yml to extend (--mkdocs-config)
    //
    // Returns: Result<MkdocsAppender>
    //   Success: an appender positioned at the end of the file
    //   Error: Io if the file can't be opened or written
    //
    // Existing content is never touched, we only ever append.
    pub async fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|e| HarvestError::io(path, e))?;

        let mut appender = Self {
            path: path.to_path_buf(),
            file,
        };
        appender.write(SECTION_HEADER).await?;
        Ok(appender)
    }

    /// Writes one repository's fragment and flushes it
    pub async fn append(&mut self, fragment: &NavigationFragment) -> Result<()> {
        self.write(fragment.as_str()).await
    }

    /// Syncs the file to disk and closes it
    pub async fn finish(mut self) -> Result<()> {
        self.file
            .flush()
            .await
            .map_err(|e| HarvestError::io(&self.path, e))?;
        self.file
            .sync_all()
            .await
            .map_err(|e| HarvestError::io(&self.path, e))
    }

    // tokio's File writes in the background; flush() waits until the bytes
    // have actually reached the file
    async fn write(&mut self, text: &str) -> Result<()> {
        self.file
            .write_all(text.as_bytes())
            .await
            .map_err(|e| HarvestError::io(&self.path, e))?;
        self.file
            .flush()
            .await
            .map_err(|e| HarvestError::io(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_creates_file_with_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mkdocs.yml");

        MkdocsAppender::open(&path).await.unwrap().finish().await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), SECTION_HEADER);
    }

    #[tokio::test]
    async fn test_appends_after_existing_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mkdocs.yml");
        std::fs::write(&path, "site_name: Acme Docs\nnav:\n  - Home: index.md").unwrap();

        let mut appender = MkdocsAppender::open(&path).await.unwrap();
        let mut fragment = NavigationFragment::new("widgets");
        fragment.push_file("README.md", "github", "widgets", "README.md");
        appender.append(&fragment).await.unwrap();
        appender.finish().await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            concat!(
                "site_name: Acme Docs\nnav:\n  - Home: index.md",
                "\n  - '<b>GitHub</b>':\n",
                "    - 'widgets':\n",
                "      - 'README.md': 'github/widgets/README.md'\n",
            )
        );
    }

    #[tokio::test]
    async fn test_fragment_visible_before_finish() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mkdocs.yml");

        let mut appender = MkdocsAppender::open(&path).await.unwrap();
        appender.append(&NavigationFragment::new("widgets")).await.unwrap();

        // Flushed per fragment, so a crash after this point keeps it
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("    - 'widgets':\n"));
        drop(appender);
    }

    #[tokio::test]
    async fn test_open_fails_in_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("mkdocs.yml");

        let result = MkdocsAppender::open(&path).await;
        assert!(matches!(result, Err(HarvestError::Io { .. })));
    }
}

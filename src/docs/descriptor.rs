// src/docs/descriptor.rs
// =============================================================================
// The optional per-repository descriptor, .github/docs.yml.
//
// Example:
//
//   navigatorName: Widget Service
//   category: Backend
//   includeLink: true
//   files:
//     - file: README.md
//       prettyName: Overview
//     - file: CONTRIBUTING.md
//       prettyName: Contributing
//
// A repository without the file gets defaults (its own name as the label,
// raw file names, a link back to GitHub). A repository WITH the file must set
// navigatorName, otherwise the whole run fails.
// =============================================================================

use serde::Deserialize;

use crate::error::{HarvestError, Result};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsDescriptor {
    /// Label of the repository's section in the navigation
    #[serde(default)]
    pub navigator_name: String,
    /// Free-form grouping label, only reported
    #[serde(default)]
    pub category: String,
    /// Whether to add the "Link(GitHub)" entry. Defaults to false when omitted
    #[serde(default)]
    pub include_link: bool,
    /// Display names for individual files, in declaration order
    #[serde(default)]
    pub files: Vec<FileMapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMapping {
    /// Path inside the repository, e.g. "README.md"
    pub file: String,
    pub pretty_name: String,
}

impl DocsDescriptor {
    /// Parses the raw docs.yml of `repo` and checks navigatorName is set
    pub fn parse(repo: &str, raw: &[u8]) -> Result<Self> {
        let descriptor: DocsDescriptor =
            serde_yaml::from_slice(raw).map_err(|source| HarvestError::Descriptor {
                repo: repo.to_string(),
                source,
            })?;

        if descriptor.navigator_name.trim().is_empty() {
            return Err(HarvestError::MissingNavigatorName {
                repo: repo.to_string(),
            });
        }

        Ok(descriptor)
    }

    /// Display name registered for `path`, if any (first match wins)
    pub fn pretty_name_for(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|mapping| mapping.file == path)
            .map(|mapping| mapping.pretty_name.as_str())
    }
}

// src/docs/nav.rs
// =============================================================================
// Building the mkdocs.yml navigation text for one repository.
//
// The fragment is plain text, indented to sit under the "GitHub" section that
// mkdocs.rs writes once per run:
//
//     - 'Widget Service':
//       - 'Overview': 'github/widgets/README.md'
//       - '<span style="font-style: italic;">Link(GitHub)</span>': 'https://github.com/acme/widgets'
//
// Indentation is 4 spaces for the repository entry and 6 for its children.
// =============================================================================

const REPO_INDENT: &str = "    ";
const ENTRY_INDENT: &str = "      ";
const LINK_LABEL: &str = "<span style=\"font-style: italic;\">Link(GitHub)</span>";

/// Accumulated navigation entries for one repository
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationFragment {
    text: String,
    files: usize,
}

impl NavigationFragment {
    /// Starts a fragment with the repository's section label
    pub fn new(label: &str) -> Self {
        Self {
            text: format!("{}- {}:\n", REPO_INDENT, yaml_quote(label)),
            files: 0,
        }
    }

    /// Adds an entry for a file written to <output>/<repo>/<file>
    pub fn push_file(&mut self, label: &str, prefix: &str, repo: &str, file: &str) {
        let target = if prefix.is_empty() {
            format!("{}/{}", repo, file)
        } else {
            format!("{}/{}/{}", prefix, repo, file)
        };

        self.text.push_str(&format!(
            "{}- {}: {}\n",
            ENTRY_INDENT,
            yaml_quote(label),
            yaml_quote(&target)
        ));
        self.files += 1;
    }

    /// Adds the link back to the repository on GitHub
    pub fn push_link(&mut self, url: &str) {
        self.text.push_str(&format!(
            "{}- {}: {}\n",
            ENTRY_INDENT,
            yaml_quote(LINK_LABEL),
            yaml_quote(url)
        ));
    }

    pub fn file_count(&self) -> usize {
        self.files
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Single-quoted YAML scalar: 'it''s' for it's
pub fn yaml_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

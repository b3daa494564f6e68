use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of `gh repo list --json nameWithOwner`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoListing {
    #[serde(rename = "nameWithOwner")]
    pub name_with_owner: String, // e.g., "octocat/hello-world"
}

impl RepoListing {
    #[must_use]
    pub fn new(name_with_owner: impl Into<String>) -> Self {
        Self {
            name_with_owner: name_with_owner.into(),
        }
    }

    /// Directory name used for the clone: everything after the last '/'
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name_with_owner
            .rsplit('/')
            .next()
            .unwrap_or(&self.name_with_owner)
    }

    /// Whether the local name can be joined onto the target directory
    /// without escaping it or resolving to the directory itself
    #[must_use]
    pub fn has_safe_local_name(&self) -> bool {
        let name = self.local_name();
        !(name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('\\')
            || name.contains(std::path::MAIN_SEPARATOR))
    }
}

impl fmt::Display for RepoListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name_with_owner)
    }
}

/// Running tally of a clone pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloneSummary {
    pub cloned: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl CloneSummary {
    pub fn record_cloned(&mut self) {
        self.cloned += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn record_failed(&mut self) {
        self.failed += 1;
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.cloned + self.skipped + self.failed
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl fmt::Display for CloneSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Cloned: {}", self.cloned)?;
        writeln!(f, "  Skipped: {}", self.skipped)?;
        write!(f, "  Failed: {}", self.failed)
    }
}

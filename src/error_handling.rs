use crate::ui;
use thiserror::Error;

/// Why `gh repo list` did not produce a usable listing
#[derive(Error, Debug)]
pub enum ListingError {
    #[error("GitHub CLI authentication failed")]
    AuthenticationFailed,

    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    #[error("Network error accessing GitHub")]
    Network,

    #[error("Failed to list repositories for '{owner}': {stderr}")]
    CommandFailed { owner: String, stderr: String },

    #[error("Repository listing for '{owner}' is not a JSON array of repositories: {source}")]
    InvalidJson {
        owner: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ListingError {
    /// Classify the stderr of a failed `gh repo list`
    #[must_use]
    pub fn from_stderr(owner: &str, stderr: &str) -> Self {
        if stderr.contains("authentication") || stderr.contains("not authenticated") {
            Self::AuthenticationFailed
        } else if stderr.contains("rate limit") {
            Self::RateLimited
        } else if stderr.contains("network") || stderr.contains("timeout") {
            Self::Network
        } else {
            Self::CommandFailed {
                owner: owner.to_string(),
                stderr: stderr.trim().to_string(),
            }
        }
    }

    #[must_use]
    pub const fn hints(&self) -> &'static [&'static str] {
        match self {
            Self::AuthenticationFailed => &[
                "Re-authenticate: gh auth login",
                "Check auth status: gh auth status",
                "Refresh token: gh auth refresh",
            ],
            Self::RateLimited => &[
                "Wait for rate limit reset (usually 1 hour)",
                "Check rate limit: gh api rate_limit",
            ],
            Self::Network => &[
                "Check internet connection",
                "Try again in a few moments",
                "Check GitHub status: https://www.githubstatus.com/",
            ],
            Self::CommandFailed { .. } => &[
                "Check that the owner exists: gh api users/<owner>",
                "Run the listing by hand: gh repo list <owner>",
            ],
            Self::InvalidJson { .. } => &[
                "Make sure gh is recent enough to support --json: gh --version",
            ],
        }
    }
}

/// Why a single `gh repo clone` failed
#[derive(Error, Debug)]
pub enum CloneFailure {
    #[error("SSH authentication failed for {repo}")]
    SshAuth { repo: String },

    #[error("Repository {repo} not found or inaccessible")]
    NotFound { repo: String },

    #[error("Network error cloning {repo}")]
    Network { repo: String },

    #[error("Destination for {repo} already exists and is not empty")]
    DestinationExists { repo: String },

    #[error("Failed to clone {repo}: {stderr}")]
    Other { repo: String, stderr: String },
}

impl CloneFailure {
    /// Classify the stderr of a failed `gh repo clone`
    #[must_use]
    pub fn from_stderr(repo: &str, stderr: &str) -> Self {
        let repo = repo.to_string();
        if stderr.contains("Permission denied") || stderr.contains("publickey") {
            Self::SshAuth { repo }
        } else if stderr.contains("not found")
            || stderr.contains("does not exist")
            || stderr.contains("Could not resolve to a Repository")
        {
            Self::NotFound { repo }
        } else if stderr.contains("timeout")
            || stderr.contains("timed out")
            || stderr.contains("network")
        {
            Self::Network { repo }
        } else if stderr.contains("already exists") {
            Self::DestinationExists { repo }
        } else {
            Self::Other {
                repo,
                stderr: stderr.trim().to_string(),
            }
        }
    }

    #[must_use]
    pub const fn hints(&self) -> &'static [&'static str] {
        match self {
            Self::SshAuth { .. } => &[
                "Test SSH connection: ssh -T git@github.com",
                "Add SSH key to GitHub: gh auth refresh -h github.com -s admin:public_key",
                "Or switch gh to HTTPS: gh config set git_protocol https",
            ],
            Self::NotFound { .. } => &[
                "Verify repository exists: gh repo view <owner/name>",
                "Ensure you have access to this repository",
            ],
            Self::Network { .. } => &[
                "Check internet connection",
                "Run repofetch again; repositories already cloned are skipped",
            ],
            Self::DestinationExists { .. } => &[
                "Remove or rename the conflicting path and run again",
            ],
            Self::Other { .. } => &["Check repository permissions and git connectivity"],
        }
    }
}

/// Print an error and, for failures we know how to diagnose, the recovery steps
pub fn report_failure(err: &anyhow::Error) {
    let hints: &[&str] = if let Some(listing) = err.downcast_ref::<ListingError>() {
        listing.hints()
    } else if let Some(clone) = err.downcast_ref::<CloneFailure>() {
        clone.hints()
    } else {
        &[]
    };

    ui::show_error_with_help(&format!("{err:#}"), hints);
}

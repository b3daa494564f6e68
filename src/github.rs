use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use crate::error_handling::{CloneFailure, ListingError};
use crate::models::RepoListing;
use crate::ui;

/// The two code-forge operations a clone pass needs
pub trait RepositoryHost {
    /// List up to `limit` repositories owned by `owner`, in the host's order
    fn list_repositories(&self, owner: &str, limit: u32) -> Result<Vec<RepoListing>>;

    /// Clone `repo` into `target_dir/<local name>`
    fn clone_repository(&self, repo: &RepoListing, target_dir: &Path) -> Result<()>;

    /// Login of the account the host is authenticated as
    fn current_account(&self) -> Result<String>;
}

/// `RepositoryHost` backed by the authenticated GitHub CLI
#[derive(Debug, Clone)]
pub struct GitHubCli {
    program: String,
}

impl Default for GitHubCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubCli {
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: "gh".to_string(),
        }
    }

    fn command(&self) -> Command {
        Command::new(&self.program)
    }

    /// Check if GitHub CLI is available and authenticated
    pub fn check_availability(&self) -> Result<bool> {
        let output = self
            .command()
            .args(["--version"])
            .output()
            .context("Failed to check if gh CLI is installed")?;

        if !output.status.success() {
            return Ok(false);
        }

        // Check if authenticated
        let auth_output = self
            .command()
            .args(["auth", "status"])
            .output()
            .context("Failed to check gh CLI authentication status")?;

        tracing::debug!(status = %auth_output.status, "gh auth status");
        Ok(auth_output.status.success())
    }
}

/// Parse the stdout of `gh repo list --json nameWithOwner`
pub fn parse_listing(owner: &str, stdout: &str) -> Result<Vec<RepoListing>, ListingError> {
    serde_json::from_str(stdout).map_err(|source| ListingError::InvalidJson {
        owner: owner.to_string(),
        source,
    })
}

impl RepositoryHost for GitHubCli {
    fn list_repositories(&self, owner: &str, limit: u32) -> Result<Vec<RepoListing>> {
        let limit_arg = limit.to_string();
        let args = [
            "repo",
            "list",
            owner,
            "--limit",
            limit_arg.as_str(),
            "--json",
            "nameWithOwner",
        ];
        tracing::debug!(command = %format!("{} {}", self.program, args.join(" ")), "listing repositories");

        let output = self
            .command()
            .args(args)
            .output()
            .with_context(|| format!("Failed to run gh repo list for '{owner}'"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(status = %output.status, stderr = %stderr.trim(), "gh repo list failed");
            return Err(ListingError::from_stderr(owner, &stderr).into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let repos = parse_listing(owner, &stdout)?;

        // Warn if we might have hit the limit
        if u32::try_from(repos.len()).is_ok_and(|n| n >= limit) {
            ui::print_warning(&format!(
                "Warning: Found {} repositories for {owner}, which is the --limit. Some repositories may not be shown; raise --limit to see them.",
                repos.len()
            ));
        }

        Ok(repos)
    }

    fn clone_repository(&self, repo: &RepoListing, target_dir: &Path) -> Result<()> {
        let args = [
            "repo",
            "clone",
            repo.name_with_owner.as_str(),
            repo.local_name(),
        ];
        tracing::debug!(
            command = %format!("{} {}", self.program, args.join(" ")),
            cwd = %target_dir.display(),
            "cloning repository"
        );

        let output = self
            .command()
            .args(args)
            .current_dir(target_dir)
            .output()
            .with_context(|| format!("Failed to execute gh repo clone for {repo}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(status = %output.status, stderr = %stderr.trim(), "gh repo clone failed");
            return Err(CloneFailure::from_stderr(&repo.name_with_owner, &stderr).into());
        }

        Ok(())
    }

    fn current_account(&self) -> Result<String> {
        let output = self
            .command()
            .args(["api", "user", "--jq", ".login"])
            .output()
            .context("Failed to get current GitHub account")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Failed to get current account: {}", stderr.trim());
        }

        let account = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if account.is_empty() {
            anyhow::bail!("GitHub CLI returned an empty login for the current account");
        }
        Ok(account)
    }
}

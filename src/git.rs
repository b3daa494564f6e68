use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Check if git is available on the system; `gh repo clone` shells out to it
pub fn check_git_availability() -> Result<()> {
    let output = Command::new("git").args(["--version"]).output().context(
        "Git is not installed or not available in PATH. Please install git and try again.",
    )?;

    if !output.status.success() {
        anyhow::bail!(
            "`git --version` exited with {}; check your git installation",
            output.status
        );
    }

    tracing::debug!(
        version = %String::from_utf8_lossy(&output.stdout).trim(),
        "git available"
    );
    Ok(())
}

/// Check if a directory is a git repository
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    path.join(".git").exists()
}

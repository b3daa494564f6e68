use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::github::RepositoryHost;

/// Default for `--limit`
pub const DEFAULT_LIMIT: u32 = 1000;

#[derive(Parser, Debug)]
#[command(name = "repofetch")]
#[command(about = "Clone every repository an account owns on GitHub")]
#[command(version)]
#[command(
    long_about = "Lists the repositories owned by an account through the GitHub CLI (gh) and clones each one into the target directory, skipping any whose directory already exists.\n\nRun with no arguments to fetch everything the authenticated account owns into the current directory."
)]
pub struct Cli {
    /// Account or organization whose repositories are cloned (defaults to the authenticated gh account)
    #[arg(long, env = "REPOFETCH_OWNER")]
    pub owner: Option<String>,

    /// Maximum number of repositories to list
    #[arg(long, default_value_t = DEFAULT_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,

    /// Directory to clone into (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Log the gh commands being run
    #[arg(short, long)]
    pub verbose: bool,
}

/// Fully resolved settings for one clone pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub owner: String,
    pub limit: u32,
    pub target_dir: PathBuf,
}

impl Settings {
    /// Fill in defaults from the environment and validate the target directory
    pub fn resolve(cli: &Cli, host: &impl RepositoryHost) -> Result<Self> {
        let target_dir = match &cli.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };

        if !target_dir.is_dir() {
            anyhow::bail!(
                "Target directory does not exist or is not a directory: {}",
                target_dir.display()
            );
        }

        let owner = match cli.owner.as_deref().map(str::trim) {
            Some(owner) if !owner.is_empty() => owner.to_string(),
            Some(_) => anyhow::bail!("--owner cannot be empty"),
            None => host
                .current_account()
                .context("No --owner given and the authenticated account could not be determined")?,
        };

        let settings = Self {
            owner,
            limit: cli.limit,
            target_dir,
        };
        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

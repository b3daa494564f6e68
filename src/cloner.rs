use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::config::Settings;
use crate::error_handling;
use crate::git;
use crate::github::RepositoryHost;
use crate::models::{CloneSummary, RepoListing};
use crate::ui::{self, Colors};

/// List everything `settings.owner` owns and clone what is missing
pub fn fetch_all(
    host: &impl RepositoryHost,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<CloneSummary> {
    let repos = host.list_repositories(&settings.owner, settings.limit)?;
    tracing::info!(owner = %settings.owner, count = repos.len(), "listed repositories");

    clone_missing(host, &repos, &settings.target_dir, out)
}

/// Clone every repository whose directory is absent from `target_dir`.
///
/// Repositories are processed in order, one at a time. A failed clone is
/// counted and reported, then the loop moves on; only a failure to write
/// progress to `out` aborts the pass.
pub fn clone_missing(
    host: &impl RepositoryHost,
    repos: &[RepoListing],
    target_dir: &Path,
    out: &mut impl Write,
) -> Result<CloneSummary> {
    let mut summary = CloneSummary::default();

    for repo in repos {
        let name = repo.local_name();

        if !repo.has_safe_local_name() {
            writeln!(out, "Cloning {name}... {}", paint_mark(false)).context("Failed to write progress")?;
            out.flush()?;
            ui::print_error(&format!(
                "Refusing to clone {repo}: '{name}' is not a usable directory name"
            ));
            summary.record_failed();
            continue;
        }

        let local_path = target_dir.join(name);
        if local_path.is_dir() {
            if !git::is_git_repo(&local_path) {
                tracing::warn!(path = %local_path.display(), "existing directory is not a git repository");
            }
            writeln!(out, "Skipping {name} (already exists)").context("Failed to write progress")?;
            out.flush()?;
            summary.record_skipped();
            continue;
        }

        write!(out, "Cloning {name}... ").context("Failed to write progress")?;
        out.flush()?;

        match host.clone_repository(repo, target_dir) {
            Ok(()) => {
                writeln!(out, "{}", paint_mark(true))?;
                out.flush()?;
                summary.record_cloned();
            }
            Err(e) => {
                writeln!(out, "{}", paint_mark(false))?;
                out.flush()?;
                error_handling::report_failure(&e);
                summary.record_failed();
            }
        }
    }

    debug_assert_eq!(summary.total(), repos.len());
    Ok(summary)
}

fn paint_mark(success: bool) -> String {
    if success {
        ui::paint("✓", Colors::GREEN)
    } else {
        ui::paint("✗", Colors::RED)
    }
}

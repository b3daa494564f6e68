use anyhow::Result;
use clap::Parser;

use repofetch::config::{Cli, Settings};
use repofetch::github::GitHubCli;
use repofetch::{cloner, error_handling, git, logging, ui};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        error_handling::report_failure(&err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Check if git is available
    git::check_git_availability()?;

    let github = GitHubCli::new();
    if !github.check_availability()? {
        ui::show_error_with_help(
            "GitHub CLI is not available or not authenticated",
            &[
                "Install GitHub CLI: https://cli.github.com/",
                "Then authenticate: gh auth login",
            ],
        );
        anyhow::bail!("GitHub CLI not available");
    }

    let settings = Settings::resolve(cli, &github)?;
    ui::print_info(&format!(
        "Fetching repositories owned by {} into {}",
        settings.owner,
        settings.target_dir.display()
    ));

    let mut stdout = std::io::stdout().lock();
    let summary = cloner::fetch_all(&github, &settings, &mut stdout)?;
    drop(stdout);

    println!();
    ui::print_header(&summary.to_string());
    if summary.has_failures() {
        ui::print_warning("Some repositories failed to clone; run again to retry them.");
    } else {
        ui::print_success("All repositories are present.");
    }

    Ok(())
}

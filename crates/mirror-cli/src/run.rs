//! Mirror command implementation

use colored::Colorize;

use mirror_core::{SyncConfig, SyncReport, run_sync};

use crate::cli::Cli;
use crate::error::{CliError, Result};

pub fn run_mirror(cli: Cli) -> Result<()> {
    if !cli.vss_project.starts_with("$/") {
        return Err(CliError::user(format!(
            "VSS project must start with $/, got '{}'",
            cli.vss_project
        )));
    }

    if !cli.json {
        println!(
            "{} Mirroring branch {} into {}...",
            "=>".blue().bold(),
            cli.git_branch.cyan(),
            cli.vss_project.cyan()
        );
    }

    let matching = cli.matching();
    let json = cli.json;
    let config = SyncConfig {
        git_url: cli.git_url,
        git_branch: cli.git_branch,
        vss_project: cli.vss_project,
        vss_user: cli.vss_user,
        vss_password: cli.vss_password,
        git_tag: cli.git_tag,
        database: cli.ss_dir,
        matching,
        keep_clone: cli.keep_clone,
    };

    let report = run_sync(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &SyncReport) {
    println!(
        "{} {} in sync with {}",
        "OK".green().bold(),
        report.project.cyan(),
        report.branch.cyan()
    );
    println!(
        "   {} directories reconciled, {} operations applied",
        report.dirs_reconciled,
        report.operations()
    );
    println!(
        "   files: {} added, {} deleted; projects: {} added, {} deleted",
        report.files_added, report.files_deleted, report.dirs_added, report.dirs_deleted
    );
    if let Some(tag) = &report.tag {
        println!("   tagged {}", tag.cyan());
    }
    if let Some(dir) = &report.clone_dir {
        println!("   clone retained at {}", dir.display());
    }
}

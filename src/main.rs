//! skill-lint Entry Point
//!
//! Runs the lint against the current working directory (the skill
//! root) and maps the report onto the process contract: the success
//! line goes to stdout with exit 0, fatal diagnostics go to stderr
//! with exit 1, and advisories go to stderr without affecting the
//! exit code.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use skill_lint::config::LintConfig;
use skill_lint::runner;
use skill_lint::types::Verdict;

/// Validate a skill package: companion files and SKILL.md links.
#[derive(Parser, Debug)]
#[command(
    name = "skill-lint",
    version,
    about = "Validate a skill package: companion files and SKILL.md links",
    long_about = "Checks that the skill's required companion files exist and that \
                  SKILL.md links are relative and at most one level deep. Run from \
                  the skill root."
)]
struct Cli {
    /// Enable debug logging (stderr)
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so the stdout verdict stays machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let config = LintConfig::default();

    let report = match runner::run(Path::new("."), &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {:#}", "ERROR:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    for advisory in &report.advisories {
        eprintln!("{} {}", "WARN:".yellow().bold(), advisory.message);
    }

    match report.verdict {
        Verdict::Pass { message } => {
            println!("{}", message);
            ExitCode::SUCCESS
        }
        Verdict::Fail { error } => {
            eprintln!("{} {}", "ERROR:".red().bold(), error);
            ExitCode::FAILURE
        }
    }
}

//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, InstallOptions, InstallOutcome};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "kitsetup")]
#[command(version)]
#[command(
    about = "Post-install setup wizard for the JustBetter Statamic starter kit",
    long_about = None
)]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    path: Option<PathBuf>,
    /// Answer prompts from a TOML file instead of the terminal
    #[arg(short, long, value_name = "FILE")]
    answers: Option<PathBuf>,
    /// Config file (defaults to kitsetup.toml in the project root)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Fail when a template token is not found
    #[arg(long)]
    strict: bool,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = InstallOptions {
        root: cli.path,
        answers: cli.answers,
        config: cli.config,
        strict: cli.strict,
    };

    if let Err(e) = run_install(options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_install(options: InstallOptions) -> Result<(), AppError> {
    let outcome = api::install(options)?;
    report_misses(&outcome);
    Ok(())
}

fn report_misses(outcome: &InstallOutcome) {
    let misses = outcome.misses();
    if misses.is_empty() {
        return;
    }
    println!("⚠️  {} template value(s) were not found and left unchanged:", misses.len());
    for miss in misses {
        println!("  • {} in {}", miss.search, miss.buffer);
    }
}

/// Log to stderr so prompts and command output keep stdout. `RUST_LOG`
/// overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

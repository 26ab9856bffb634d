mod commands;
mod error;
mod repl;

use anyhow::{Context as _, Result};
use clap::Parser;
use contactbook_config as config;
use contactbook_core::AddressBook;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::error::{exit_code_for, report_error};

#[derive(Debug, Parser)]
#[command(
    name = "contactbook",
    version,
    about = "Interactive address book with birthday reminders"
)]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        verbose,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }
    debug!(upcoming_days = app_config.upcoming_days, "starting session");

    let mut book = AddressBook::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(stdin.lock(), &mut stdout.lock(), &mut book, &app_config)
        .with_context(|| "terminal i/o")?;
    debug!(contacts = book.len(), "session ended");
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

//! DANKMEMES evaluation CLI
//!
//! Scores every run in a results directory and writes the report file.
//!
//! ```bash
//! dankmemes-eval -r results/ -g gold/ -o evaluation.txt
//! ```

mod args;
mod commands;
mod console;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::Cli;
use console::CLIConsole;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = commands::evaluate::build_config(&cli).and_then(|config| {
        init_logging(config.verbose);
        commands::evaluate::run(config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            CLIConsole::new(cli.verbose).error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with environment-based filtering.
/// RUST_LOG takes precedence; --verbose defaults it to debug.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

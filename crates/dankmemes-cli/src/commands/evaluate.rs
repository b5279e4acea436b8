//! Evaluation command

use anyhow::{Context, Result};
use dankmemes_eval::{EvalConfig, EvalExecutor, EvalProgress};

use crate::args::Cli;
use crate::console::CLIConsole;

/// Merge the config file with the command line flags; flags win
pub fn build_config(cli: &Cli) -> Result<EvalConfig> {
    let mut config = match &cli.config {
        Some(path) => EvalConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EvalConfig::default(),
    };

    if let Some(results) = &cli.results {
        config = config.with_results_dir(results);
    }
    if let Some(gold) = &cli.gold {
        config = config.with_gold_dir(gold);
    }
    if let Some(output) = &cli.output {
        config = config.with_output_file(output);
    }
    if let Some(format) = cli.format {
        config = config.with_format(format.into());
    }
    if let Some(extension) = &cli.extension {
        config = config.with_extension(extension.trim_start_matches('.'));
    }
    if cli.verbose {
        config = config.verbose();
    }

    Ok(config)
}

/// Run a full evaluation
pub fn run(config: EvalConfig) -> Result<()> {
    let console = CLIConsole::new(config.verbose);
    let output = config.output_file.clone();
    tracing::debug!("Effective configuration: {:?}", config);

    let mut executor = EvalExecutor::new(config);
    executor.set_progress_callback(Box::new(move |progress: EvalProgress| match progress {
        EvalProgress::Discovered { accepted, rejected } => console.info(&format!(
            "Found {} valid submission(s), {} file(s) ignored",
            accepted, rejected
        )),
        EvalProgress::GoldLoaded { tasks } => {
            console.info(&format!("Loaded gold standards for {} task(s)", tasks))
        }
        EvalProgress::Warning { message } => console.warn(&message),
        EvalProgress::Scored {
            current,
            total,
            path,
        } => console.info(&format!("[{}/{}] {}", current + 1, total, path.display())),
    }));

    let summary = executor.run().context("Evaluation failed")?;

    console.success(&format!(
        "Evaluated {} submission(s), report written to {}",
        summary.scored_count(),
        output.display()
    ));
    Ok(())
}

//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use dankmemes_eval::ReportFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dankmemes-eval")]
#[command(about = "Score DANKMEMES submissions against the gold standard")]
#[command(
    long_about = r#"Score DANKMEMES submissions against the gold standard

Every file in the results directory named
  dankmemes-<task>-<team>-<run>.csv
is validated and scored against the gold standard files
(meme*, hate*, event*) found in the gold directory.

EXAMPLE:
  dankmemes-eval -r results/ -g gold/ -o evaluation.txt"#
)]
#[command(version)]
pub struct Cli {
    /// Directory holding the submitted runs
    #[arg(short, long, env = "DANKMEMES_RESULTS", value_parser = existing_dir)]
    pub results: Option<PathBuf>,

    /// Directory holding the gold standard files
    #[arg(short, long, env = "DANKMEMES_GOLD", value_parser = existing_dir)]
    pub gold: Option<PathBuf>,

    /// File the report is written to [default: evaluation.txt]
    #[arg(short, long, env = "DANKMEMES_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Extension of tabular files [default: csv]
    #[arg(long)]
    pub extension: Option<String>,

    /// TOML configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,
}

/// Report format accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

fn existing_dir(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("{value} is not an existing directory"))
    }
}

//! Evaluation configuration
//!
//! Configuration options for running evaluations.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{EvalError, EvalResult};
use crate::report::ReportFormat;
use crate::submission::DEFAULT_EXTENSION;

/// Configuration for evaluation runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Directory holding the submitted runs
    pub results_dir: Option<PathBuf>,

    /// Directory holding the gold standard files
    pub gold_dir: Option<PathBuf>,

    /// File the report is written to
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Report format
    #[serde(default = "default_format")]
    pub format: ReportFormat,

    /// Extension of tabular files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Whether to run in verbose mode
    #[serde(default)]
    pub verbose: bool,
}

fn default_output_file() -> PathBuf {
    PathBuf::from("evaluation.txt")
}

fn default_format() -> ReportFormat {
    ReportFormat::Text
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            results_dir: None,
            gold_dir: None,
            output_file: default_output_file(),
            format: default_format(),
            extension: default_extension(),
            verbose: false,
        }
    }
}

impl EvalConfig {
    /// Create a new config for the given results and gold directories
    pub fn new(results_dir: impl Into<PathBuf>, gold_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: Some(results_dir.into()),
            gold_dir: Some(gold_dir.into()),
            ..Default::default()
        }
    }

    /// Load a config from a TOML file; absent keys take their defaults
    pub fn from_toml_file(path: impl AsRef<Path>) -> EvalResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| EvalError::io(path, e))?;
        toml::from_str(&content).map_err(|source| EvalError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the results directory
    pub fn with_results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = Some(dir.into());
        self
    }

    /// Set the gold directory
    pub fn with_gold_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.gold_dir = Some(dir.into());
        self
    }

    /// Set output file
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }

    /// Set report format
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Set tabular file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Enable verbose mode
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Check that both input directories are set and exist.
    ///
    /// Returns the results and gold directories.
    pub fn validate(&self) -> EvalResult<(&Path, &Path)> {
        let results_dir = require_dir(self.results_dir.as_deref(), "results")?;
        let gold_dir = require_dir(self.gold_dir.as_deref(), "gold")?;
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(EvalError::config(format!(
                "invalid file extension {:?}, expected something like \"csv\"",
                self.extension
            )));
        }
        Ok((results_dir, gold_dir))
    }
}

fn require_dir<'a>(dir: Option<&'a Path>, what: &str) -> EvalResult<&'a Path> {
    let dir = dir.ok_or_else(|| EvalError::config(format!("no {what} directory was given")))?;
    if !dir.is_dir() {
        return Err(EvalError::config(format!(
            "{what} directory {:?} does not exist",
            dir
        )));
    }
    Ok(dir)
}

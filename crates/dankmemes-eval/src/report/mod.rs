//! Report generation for evaluation results
//!
//! Generates the plain text scoreboard file or a JSON dump of the run.

mod json;
mod text;

pub use json::JsonReporter;
pub use text::{DIVIDER, TextReporter};

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{SkippedSubmission, SubmissionReport};
use crate::submission::Rejection;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Text,
    Json,
}

/// Everything a run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationSummary {
    /// Scored submissions in processing order
    pub reports: Vec<SubmissionReport>,
    /// Valid submissions that could not be scored
    #[serde(default)]
    pub skipped: Vec<SkippedSubmission>,
    /// Files that failed validation
    #[serde(default)]
    pub rejected: Vec<Rejection>,
    /// Every warning raised during the run, in order
    #[serde(default)]
    pub warnings: Vec<String>,
    pub results_dir: PathBuf,
    pub gold_dir: PathBuf,
    pub timestamp: DateTime<Utc>,
    /// Version of the evaluator
    pub evaluator_version: String,
}

impl EvaluationSummary {
    /// Create an empty summary for a run over the given directories
    pub fn new(results_dir: impl Into<PathBuf>, gold_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports: Vec::new(),
            skipped: Vec::new(),
            rejected: Vec::new(),
            warnings: Vec::new(),
            results_dir: results_dir.into(),
            gold_dir: gold_dir.into(),
            timestamp: Utc::now(),
            evaluator_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn scored_count(&self) -> usize {
        self.reports.len()
    }
}

/// Render a float the way Python's `repr` does (`1.0`, `0.6667`, `1e-05`)
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let abs = value.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let formatted = format!("{value:e}");
        if let Some((mantissa, exponent)) = formatted.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exponent.abs());
            }
        }
        return formatted;
    }

    let plain = value.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}

//! Results of scoring one submission

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::join::SanityCheck;
use crate::metrics::PrfScores;
use crate::submission::SubmissionMetadata;

/// Scoring strategy applied to a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Binary precision/recall/F1 of the positive class
    Binary,
    /// Unweighted mean of per-class precision/recall/F1
    MacroAveraged,
    /// Precision/recall/F1 over same-cluster decisions for item pairs
    Pairwise,
    /// Silhouette coefficient over submitted distances
    Silhouette,
}

/// What the metric computation produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MetricOutcome {
    Scores(PrfScores),
    Silhouette { score: f64 },
    Unavailable { reason: String },
}

/// Metric block of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub kind: MetricKind,
    pub outcome: MetricOutcome,
}

/// Everything reported for one scored submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReport {
    pub path: PathBuf,
    pub metadata: SubmissionMetadata,
    /// Missing-value counts of labelled submissions
    pub sanity: Option<SanityCheck>,
    /// Warnings that belong in the report itself
    #[serde(default)]
    pub notices: Vec<String>,
    pub evaluation: Evaluation,
}

/// A validated submission that could not be scored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSubmission {
    pub path: PathBuf,
    pub metadata: SubmissionMetadata,
    pub reason: String,
}

/// Result of handing one submission to the engine
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreOutcome {
    Scored {
        report: SubmissionReport,
        /// Console-only warnings raised while scoring
        warnings: Vec<String>,
    },
    Skipped(SkippedSubmission),
}

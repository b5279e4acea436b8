//! Scoring engine: gold standard join and per-task metric selection

mod engine;
mod join;
mod outcome;

pub use engine::{POSITIVE_LABEL, SCORE_DECIMALS, ScoringEngine, companion_path};
pub use join::{JoinedRecord, JoinedTable, SanityCheck};
pub use outcome::{
    Evaluation, MetricKind, MetricOutcome, ScoreOutcome, SkippedSubmission, SubmissionReport,
};

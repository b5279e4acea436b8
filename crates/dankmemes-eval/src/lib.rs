//! DANKMEMES submission evaluator
//!
//! Scores the runs submitted to the DANKMEMES meme classification benchmark
//! against the gold standard annotations.
//!
//! # Features
//!
//! - **Submission Validation**: filename convention and column schema checks
//! - **Gold Standards**: per-task tables loaded from prefixed files
//! - **Scoring**: binary and macro-averaged precision/recall/F1, pairwise
//!   clustering scores and silhouette over submitted distances
//! - **Report Generation**: plain text scoreboard or JSON
//!
//! # Example
//!
//! ```rust,no_run
//! use dankmemes_eval::{EvalConfig, EvalExecutor};
//!
//! let config = EvalConfig::new("results", "gold").with_output_file("evaluation.txt");
//! let summary = EvalExecutor::new(config).run()?;
//! println!("scored {} submission(s)", summary.scored_count());
//! # Ok::<(), dankmemes_eval::EvalError>(())
//! ```

pub mod error;
pub mod gold;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod scoring;
pub mod submission;

// Re-exports for convenience
pub use error::{EvalError, EvalResult};
pub use gold::{GoldStandardLoader, GoldStandards, GoldTable};
pub use metrics::{MetricError, PrfScores};
pub use report::{EvaluationSummary, JsonReporter, ReportFormat, TextReporter};
pub use runner::{EvalConfig, EvalExecutor, EvalProgress, ProgressCallback};
pub use scoring::{MetricOutcome, ScoreOutcome, ScoringEngine, SubmissionReport};
pub use submission::{
    Submission, SubmissionMetadata, SubmissionValidator, TaskName, ValidationReport,
};

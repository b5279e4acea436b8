//! Evaluation executor
//!
//! Runs one evaluation from directory scan to flushed report file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use super::EvalConfig;
use crate::error::{EvalError, EvalResult};
use crate::gold::{GoldStandardLoader, GoldStandards};
use crate::report::{EvaluationSummary, JsonReporter, ReportFormat, TextReporter};
use crate::scoring::{ScoreOutcome, ScoringEngine};
use crate::submission::{Submission, SubmissionValidator};

/// Callback for progress updates during evaluation
pub type ProgressCallback = Box<dyn Fn(EvalProgress) + Send + Sync>;

/// Progress update during evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum EvalProgress {
    /// The results directory was scanned
    Discovered { accepted: usize, rejected: usize },
    /// Gold standards were loaded for this many tasks
    GoldLoaded { tasks: usize },
    /// A non-fatal problem; the run carries on
    Warning { message: String },
    /// A submission was scored and added to the report
    Scored {
        /// Index of the submission (0-based)
        current: usize,
        total: usize,
        path: PathBuf,
    },
}

/// Executor for evaluation runs
pub struct EvalExecutor {
    /// Configuration
    config: EvalConfig,

    /// Progress callback
    progress_callback: Option<ProgressCallback>,
}

impl EvalExecutor {
    /// Create a new evaluation executor
    pub fn new(config: EvalConfig) -> Self {
        Self {
            config,
            progress_callback: None,
        }
    }

    /// Set progress callback
    pub fn set_progress_callback(&mut self, callback: ProgressCallback) {
        self.progress_callback = Some(callback);
    }

    /// Run the evaluation and write the report file.
    ///
    /// Fails before touching the output file when the configuration is
    /// incomplete or the gold directory holds an unrecognized file.
    pub fn run(&self) -> EvalResult<EvaluationSummary> {
        let (results_dir, gold_dir) = self.config.validate()?;
        let mut summary = EvaluationSummary::new(results_dir, gold_dir);

        let validation = SubmissionValidator::new(results_dir)
            .with_extension(&self.config.extension)
            .validate()?;
        self.emit_progress(EvalProgress::Discovered {
            accepted: validation.accepted.len(),
            rejected: validation.rejected.len(),
        });
        for rejection in &validation.rejected {
            self.warn(&mut summary, rejection.message());
        }
        summary.rejected = validation.rejected;

        let gold = GoldStandardLoader::new(gold_dir)
            .with_extension(&self.config.extension)
            .load()?;
        self.emit_progress(EvalProgress::GoldLoaded {
            tasks: gold.tasks().len(),
        });

        let output = &self.config.output_file;
        let file = File::create(output).map_err(|e| EvalError::io(output, e))?;
        let mut out = BufWriter::new(file);

        self.score_all(&validation.accepted, &gold, &mut out, &mut summary)?;

        if self.config.format == ReportFormat::Json {
            let json = JsonReporter::generate(&summary)?;
            out.write_all(json.as_bytes())
                .map_err(|e| EvalError::io(output, e))?;
        }
        out.flush().map_err(|e| EvalError::io(output, e))?;

        tracing::info!(
            "Wrote {} report(s) to {:?}",
            summary.scored_count(),
            output
        );
        Ok(summary)
    }

    /// Score every submission; text blocks are written as soon as they exist
    fn score_all<W: Write>(
        &self,
        submissions: &[Submission],
        gold: &GoldStandards,
        out: &mut W,
        summary: &mut EvaluationSummary,
    ) -> EvalResult<()> {
        let engine = ScoringEngine::new(gold);
        let total = submissions.len();

        for (index, submission) in submissions.iter().enumerate() {
            tracing::debug!("Scoring {:?}", submission.path);

            match engine.score(submission) {
                ScoreOutcome::Scored { report, warnings } => {
                    for warning in warnings {
                        self.warn(summary, warning);
                    }
                    for notice in &report.notices {
                        self.warn(summary, notice.clone());
                    }

                    if self.config.format == ReportFormat::Text {
                        TextReporter::write_block(out, &report)
                            .map_err(|e| EvalError::io(&self.config.output_file, e))?;
                    }

                    self.emit_progress(EvalProgress::Scored {
                        current: index,
                        total,
                        path: submission.path.clone(),
                    });
                    summary.reports.push(report);
                }
                ScoreOutcome::Skipped(skipped) => {
                    self.warn(summary, skipped.reason.clone());
                    summary.skipped.push(skipped);
                }
            }
        }

        Ok(())
    }

    fn warn(&self, summary: &mut EvaluationSummary, message: String) {
        summary.warnings.push(message.clone());
        self.emit_progress(EvalProgress::Warning { message });
    }

    /// Emit progress update
    fn emit_progress(&self, progress: EvalProgress) {
        if let Some(callback) = &self.progress_callback {
            callback(progress);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    fn fixture() -> (TempDir, EvalConfig) {
        let dir = TempDir::new().unwrap();
        let results = dir.path().join("results");
        let gold = dir.path().join("gold");
        fs::create_dir(&results).unwrap();
        fs::create_dir(&gold).unwrap();

        fs::write(gold.join("meme_test.csv"), "File,Meme\na.jpg,1\nb.jpg,0\n").unwrap();
        fs::write(
            results.join("dankmemes-task1-UniX-1.csv"),
            "File,Label\na.jpg,1\nb.jpg,0\n",
        )
        .unwrap();
        fs::write(results.join("notes.csv"), "File,Label\n").unwrap();

        let config = EvalConfig::new(&results, &gold).with_output_file(dir.path().join("out.txt"));
        (dir, config)
    }

    #[test]
    fn test_run_writes_text_report() {
        let (dir, config) = fixture();
        let summary = EvalExecutor::new(config).run().unwrap();

        assert_eq!(summary.scored_count(), 1);
        assert_eq!(summary.rejected.len(), 1);
        assert_eq!(summary.warnings.len(), 1);

        let text = fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert!(text.starts_with("TEAM: UniX\nTASK: task1\nRUN: 1\n\n"));
        assert!(text.contains("- F1 SCORE: 1.0\n"));
    }

    #[test]
    fn test_run_writes_json_report() {
        let (dir, config) = fixture();
        let summary = EvalExecutor::new(config.with_format(ReportFormat::Json))
            .run()
            .unwrap();

        let json = fs::read_to_string(dir.path().join("out.txt")).unwrap();
        let parsed: EvaluationSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.reports, summary.reports);
    }

    #[test]
    fn test_progress_callback_sees_warnings() {
        let (_dir, config) = fixture();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);

        let mut executor = EvalExecutor::new(config);
        executor.set_progress_callback(Box::new(move |p| sink.lock().unwrap().push(p)));
        executor.run().unwrap();

        let events = events.lock().unwrap();
        assert_eq!(
            events[0],
            EvalProgress::Discovered {
                accepted: 1,
                rejected: 1
            }
        );
        assert!(
            events
                .iter()
                .any(|e| matches!(e, EvalProgress::Warning { message } if message.contains("notes.csv")))
        );
        assert!(
            events
                .iter()
                .any(|e| matches!(e, EvalProgress::Scored { current: 0, total: 1, .. }))
        );
    }

    #[test]
    fn test_invalid_gold_file_aborts_before_output() {
        let (dir, config) = fixture();
        fs::write(
            config.gold_dir.as_ref().unwrap().join("random.csv"),
            "File,Meme\n",
        )
        .unwrap();

        let err = EvalExecutor::new(config).run().unwrap_err();
        assert!(matches!(err, EvalError::InvalidGoldFile { .. }));
        assert!(!dir.path().join("out.txt").exists());
    }

    #[test]
    fn test_missing_directories_are_fatal() {
        let err = EvalExecutor::new(EvalConfig::default()).run().unwrap_err();
        assert!(matches!(err, EvalError::Config { .. }));
    }
}

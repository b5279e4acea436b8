//! Scoring of a single validated submission
//!
//! The task named in the filename decides the strategy. Every problem found
//! here concerns one submission only and never aborts the run.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::join::JoinedTable;
use super::outcome::{
    Evaluation, MetricKind, MetricOutcome, ScoreOutcome, SkippedSubmission, SubmissionReport,
};
use crate::gold::GoldStandards;
use crate::metrics::{
    DistanceMatrix, MetricError, PrfScores, Side, binary_prf, macro_prf, pairwise_prf,
    require_defined, silhouette_score,
};
use crate::submission::{
    Label, LabelTable, Submission, TaskName, companion_stem, read_distances,
};

/// Decimals kept in precision/recall/F1 scores
pub const SCORE_DECIMALS: usize = 4;

/// Label of the positive class in the binary tasks
pub const POSITIVE_LABEL: i64 = 1;

/// Scores submissions against a set of gold standards
pub struct ScoringEngine<'a> {
    gold: &'a GoldStandards,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(gold: &'a GoldStandards) -> Self {
        Self { gold }
    }

    /// Score one submission with the strategy of its task
    pub fn score(&self, submission: &Submission) -> ScoreOutcome {
        match submission.metadata.task_name {
            TaskName::Task1 | TaskName::Task2 => {
                self.score_labelled(submission, MetricKind::Binary, binary_scores)
            }
            TaskName::Task3Labelled => {
                self.score_labelled(submission, MetricKind::MacroAveraged, macro_scores)
            }
            TaskName::Task3Unlabelled => {
                self.score_labelled(submission, MetricKind::Pairwise, pairwise_scores)
            }
            TaskName::Task3UnlabelledDistances => self.score_distances(submission),
        }
    }

    /// Label submissions: join with gold, count gaps, then apply `metric`
    fn score_labelled(
        &self,
        submission: &Submission,
        kind: MetricKind,
        metric: fn(&JoinedTable) -> Result<PrfScores, MetricError>,
    ) -> ScoreOutcome {
        let base = submission.metadata.task_name.base_task();
        let Some(gold) = self.gold.get(base) else {
            return skip(
                submission,
                format!(
                    "no gold standard for {} was loaded, so that {} will be ignored.",
                    base,
                    submission.path.display()
                ),
            );
        };

        let table = match LabelTable::from_path(&submission.path) {
            Ok(table) => table,
            Err(e) => {
                return skip(
                    submission,
                    format!("{} will be ignored: {}", submission.path.display(), e),
                );
            }
        };

        let joined = JoinedTable::left_join(&table, gold);
        let sanity = joined.sanity_check();
        tracing::debug!(
            "{:?}: {} rows, {} missing labels, {} outside the test set",
            submission.path,
            joined.len(),
            sanity.missing_labels,
            sanity.outside_test_set
        );

        let mut warnings = Vec::new();
        let outcome = match metric(&joined) {
            Ok(scores) => MetricOutcome::Scores(scores.rounded(SCORE_DECIMALS)),
            Err(e) => unavailable(&submission.path, e, &mut warnings),
        };

        ScoreOutcome::Scored {
            report: SubmissionReport {
                path: submission.path.clone(),
                metadata: submission.metadata.clone(),
                sanity: Some(sanity),
                notices: Vec::new(),
                evaluation: Evaluation { kind, outcome },
            },
            warnings,
        }
    }

    /// Distance submissions: rebuild the matrix and compute the silhouette
    /// against the clusters of the companion labels run
    fn score_distances(&self, submission: &Submission) -> ScoreOutcome {
        let Some(companion) = companion_path(submission) else {
            return skip(
                submission,
                format!(
                    "{} does not name a distances run and will be ignored.",
                    submission.path.display()
                ),
            );
        };
        let labels = match LabelTable::from_path(&companion) {
            Ok(labels) => labels,
            Err(e) if e.is_not_found() => {
                return skip(
                    submission,
                    format!(
                        "unable to find \"{}\", so that {} will be ignored.",
                        companion.display(),
                        submission.path.display()
                    ),
                );
            }
            Err(e) => {
                return skip(
                    submission,
                    format!(
                        "unable to read \"{}\" ({}), so that {} will be ignored.",
                        companion.display(),
                        e,
                        submission.path.display()
                    ),
                );
            }
        };

        let rows = match read_distances(&submission.path) {
            Ok(rows) => rows,
            Err(e) => {
                return skip(
                    submission,
                    format!("{} will be ignored: {}", submission.path.display(), e),
                );
            }
        };

        // Position of each file in the labels run; a repeated file keeps its last row
        let index: HashMap<&str, usize> = labels
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.file.as_str(), i))
            .collect();

        let mut matrix = DistanceMatrix::new(labels.len());
        let mut unknown_rows = 0usize;
        for row in &rows {
            match (index.get(row.first.as_str()), index.get(row.second.as_str())) {
                (Some(&i), Some(&j)) => matrix.set_symmetric(i, j, row.distance),
                _ => unknown_rows += 1,
            }
        }

        let mut warnings = Vec::new();
        if unknown_rows > 0 {
            warnings.push(format!(
                "{} row(s) of '{}' name files that are not in '{}' and were skipped.",
                unknown_rows,
                submission.path.display(),
                companion.display()
            ));
        }

        let mut notices = Vec::new();
        if !matrix.is_complete() {
            notices.push(format!(
                "it looks some pairwise distances are missing from '{}'. This may affect the model evaluation",
                submission.path.display()
            ));
        }

        let outcome = match cluster_silhouette(&matrix, &labels) {
            Ok(score) => MetricOutcome::Silhouette { score },
            Err(e) => unavailable(&submission.path, e, &mut warnings),
        };

        ScoreOutcome::Scored {
            report: SubmissionReport {
                path: submission.path.clone(),
                metadata: submission.metadata.clone(),
                sanity: None,
                notices,
                evaluation: Evaluation {
                    kind: MetricKind::Silhouette,
                    outcome,
                },
            },
            warnings,
        }
    }
}

/// Path of the labels run a distances submission depends on: the same
/// filename with the task token swapped
pub fn companion_path(submission: &Submission) -> Option<PathBuf> {
    let path = &submission.path;
    let mut name = companion_stem(path.file_stem()?.to_str()?)?;
    if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
        name.push('.');
        name.push_str(extension);
    }
    Some(path.with_file_name(name))
}

fn binary_scores(joined: &JoinedTable) -> Result<PrfScores, MetricError> {
    let gold_column = joined.gold_column();
    let predicted_column = joined.predicted_column();
    let gold = require_defined(&gold_column, Side::Gold)?;
    let predicted = require_defined(&predicted_column, Side::Predicted)?;
    let positive = Label::from(POSITIVE_LABEL);
    binary_prf(&gold, &predicted, &&positive)
}

fn macro_scores(joined: &JoinedTable) -> Result<PrfScores, MetricError> {
    let gold_column = joined.gold_column();
    let predicted_column = joined.predicted_column();
    let gold = require_defined(&gold_column, Side::Gold)?;
    let predicted = require_defined(&predicted_column, Side::Predicted)?;
    macro_prf(&gold, &predicted)
}

fn pairwise_scores(joined: &JoinedTable) -> Result<PrfScores, MetricError> {
    pairwise_prf(&joined.gold_column(), &joined.predicted_column())
}

fn cluster_silhouette(matrix: &DistanceMatrix, labels: &LabelTable) -> Result<f64, MetricError> {
    let column = labels.labels();
    let clusters = require_defined(&column, Side::Predicted)?;
    silhouette_score(matrix, &clusters)
}

fn unavailable(path: &Path, error: MetricError, warnings: &mut Vec<String>) -> MetricOutcome {
    tracing::warn!("could not score {:?}: {}", path, error);
    warnings.push(format!(
        "the scores of \"{}\" could not be computed: {}",
        path.display(),
        error
    ));
    MetricOutcome::Unavailable {
        reason: error.to_string(),
    }
}

fn skip(submission: &Submission, reason: String) -> ScoreOutcome {
    tracing::warn!("{}", reason);
    ScoreOutcome::Skipped(SkippedSubmission {
        path: submission.path.clone(),
        metadata: submission.metadata.clone(),
        reason,
    })
}

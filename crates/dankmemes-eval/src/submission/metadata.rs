//! Submission naming convention
//!
//! Result files are named `dankmemes-<task>-<team>-<run>.<ext>`. The team
//! name may itself contain hyphens; the run id is always the last segment.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Literal every submission filename starts with
pub const FILENAME_PREFIX: &str = "dankmemes";

const SEPARATOR: char = '-';

/// Task a submission was produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskName {
    /// Meme detection (binary)
    Task1,
    /// Hate speech identification (binary)
    Task2,
    /// Event clustering, supervised (multi-class)
    Task3Labelled,
    /// Event clustering, unsupervised (cluster ids)
    Task3Unlabelled,
    /// Pairwise distances backing an unsupervised run
    Task3UnlabelledDistances,
}

impl TaskName {
    /// Identifier used in filenames and report headings
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskName::Task1 => "task1",
            TaskName::Task2 => "task2",
            TaskName::Task3Labelled => "task3_labelled",
            TaskName::Task3Unlabelled => "task3_unlabelled",
            TaskName::Task3UnlabelledDistances => "task3_unlabelled_distances",
        }
    }

    /// Parse a filename token, case-sensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "task1" => Some(TaskName::Task1),
            "task2" => Some(TaskName::Task2),
            "task3_labelled" => Some(TaskName::Task3Labelled),
            "task3_unlabelled" => Some(TaskName::Task3Unlabelled),
            "task3_unlabelled_distances" => Some(TaskName::Task3UnlabelledDistances),
            _ => None,
        }
    }

    /// Gold standard this task is scored against
    pub fn base_task(&self) -> BaseTask {
        match self {
            TaskName::Task1 => BaseTask::Task1,
            TaskName::Task2 => BaseTask::Task2,
            TaskName::Task3Labelled
            | TaskName::Task3Unlabelled
            | TaskName::Task3UnlabelledDistances => BaseTask::Task3,
        }
    }

    /// Header a submission for this task must carry, in order
    pub fn expected_columns(&self) -> &'static [&'static str] {
        match self {
            TaskName::Task3UnlabelledDistances => &["Image 1", "Image 2", "Distance"],
            _ => &["File", "Label"],
        }
    }

    /// Get all task names
    pub fn all() -> &'static [TaskName] {
        &[
            TaskName::Task1,
            TaskName::Task2,
            TaskName::Task3Labelled,
            TaskName::Task3Unlabelled,
            TaskName::Task3UnlabelledDistances,
        ]
    }
}

impl std::fmt::Display for TaskName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shared task a gold standard file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseTask {
    Task1,
    Task2,
    Task3,
}

impl BaseTask {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseTask::Task1 => "task1",
            BaseTask::Task2 => "task2",
            BaseTask::Task3 => "task3",
        }
    }
}

impl std::fmt::Display for BaseTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Run information encoded in a submission filename
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionMetadata {
    pub task_name: TaskName,
    pub team_name: String,
    pub run_id: String,
}

impl SubmissionMetadata {
    /// Extract metadata from a submission path.
    ///
    /// Returns `None` for any filename that does not follow the naming
    /// convention; this never fails loudly.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let stem = path.as_ref().file_stem()?.to_str()?;
        Self::from_stem(stem)
    }

    /// Extract metadata from a filename without its extension
    pub fn from_stem(stem: &str) -> Option<Self> {
        let segments: Vec<&str> = stem.split(SEPARATOR).collect();
        let [prefix, task, middle @ .., run_id] = segments.as_slice() else {
            return None;
        };
        if *prefix != FILENAME_PREFIX {
            return None;
        }
        let task_name = TaskName::parse(task)?;

        Some(Self {
            task_name,
            team_name: middle.join("-"),
            run_id: (*run_id).to_string(),
        })
    }
}

/// Stem of the cluster labels run that a distances run depends on.
///
/// Only the task token is swapped, so the rest of the stem stays exactly as
/// submitted, empty segments included. `None` unless `stem` names a
/// distances run.
pub fn companion_stem(stem: &str) -> Option<String> {
    let distances = format!("{FILENAME_PREFIX}-{}", TaskName::Task3UnlabelledDistances);
    let rest = stem.strip_prefix(&distances)?;
    if !rest.starts_with(SEPARATOR) {
        return None;
    }
    Some(format!("{FILENAME_PREFIX}-{}{rest}", TaskName::Task3Unlabelled))
}

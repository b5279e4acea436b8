//! Submission discovery and format checks
//!
//! Walks the results directory and keeps only the files whose name and
//! header follow the submission guidelines.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use super::metadata::SubmissionMetadata;
use super::tabular::read_header;
use crate::error::{EvalError, EvalResult};

/// Extension of tabular files
pub const DEFAULT_EXTENSION: &str = "csv";

/// A result file that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub path: PathBuf,
    pub metadata: SubmissionMetadata,
}

/// Why a candidate file was left out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    /// The filename does not follow the naming convention
    MalformedFilename,
    /// The header is not the one required for the task
    MalformedSchema { found: Vec<String> },
    /// The header could not be read at all
    Unreadable { error: String },
}

/// A candidate file that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub path: PathBuf,
    pub reason: RejectReason,
}

impl Rejection {
    /// User facing description of the rejection
    pub fn message(&self) -> String {
        match self.reason {
            RejectReason::MalformedFilename => format!(
                "the filename \"{}\" doesn't follow the format described in the guidelines and will be ignored.",
                self.path.display()
            ),
            RejectReason::MalformedSchema { .. } | RejectReason::Unreadable { .. } => format!(
                "the file \"{}\" isn't properly formatted and will be ignored.",
                self.path.display()
            ),
        }
    }
}

/// Outcome of validating a results directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Files accepted for scoring, sorted by path
    pub accepted: Vec<Submission>,
    /// Files left out, in discovery order
    pub rejected: Vec<Rejection>,
}

/// Validator for a directory of result files
pub struct SubmissionValidator {
    results_dir: PathBuf,
    extension: String,
}

impl SubmissionValidator {
    /// Create a validator for the given results directory
    pub fn new(results_dir: impl AsRef<Path>) -> Self {
        Self {
            results_dir: results_dir.as_ref().to_path_buf(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Use a different tabular file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Scan the results directory and check every candidate file
    pub fn validate(&self) -> EvalResult<ValidationReport> {
        let mut report = ValidationReport::default();

        for path in self.candidates()? {
            match Self::check(&path) {
                Ok(metadata) => {
                    tracing::debug!("accepted submission {:?}", path);
                    report.accepted.push(Submission { path, metadata });
                }
                Err(reason) => {
                    let rejection = Rejection { path, reason };
                    tracing::warn!("{}", rejection.message());
                    report.rejected.push(rejection);
                }
            }
        }

        report.accepted.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(report)
    }

    /// Check a single file's name and header
    pub fn check(path: &Path) -> Result<SubmissionMetadata, RejectReason> {
        let metadata =
            SubmissionMetadata::from_path(path).ok_or(RejectReason::MalformedFilename)?;

        let header = read_header(path).map_err(|e| RejectReason::Unreadable {
            error: e.to_string(),
        })?;
        let expected = metadata.task_name.expected_columns();
        if header.iter().map(String::as_str).ne(expected.iter().copied()) {
            return Err(RejectReason::MalformedSchema { found: header });
        }

        Ok(metadata)
    }

    /// Files directly inside the results directory with the tabular extension
    fn candidates(&self) -> EvalResult<Vec<PathBuf>> {
        if !self.results_dir.is_dir() {
            return Err(EvalError::config(format!(
                "results directory {:?} does not exist",
                self.results_dir
            )));
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.results_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| EvalError::Walk {
                path: self.results_dir.clone(),
                source: e,
            })?;
            if is_tabular_file(entry.path(), &self.extension) {
                paths.push(entry.into_path());
            }
        }

        Ok(paths)
    }
}

/// Check if a path is a visible regular file with the given extension
pub(crate) fn is_tabular_file(path: &Path, extension: &str) -> bool {
    if !path.is_file() {
        return false;
    }
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'));

    !hidden && path.extension().and_then(|e| e.to_str()) == Some(extension)
}

//! Gold standard loading from a directory
//!
//! The task a gold file belongs to is decided by its filename prefix.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{GoldStandards, GoldTable};
use crate::error::{EvalError, EvalResult};
use crate::submission::{BaseTask, FILE_COLUMN, LabelTable, is_tabular_file};

/// Where the gold labels of a task live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoldSource {
    /// Basename prefix of the gold file
    pub prefix: &'static str,
    pub task: BaseTask,
    /// Column holding the gold value
    pub value_column: &'static str,
}

/// Known gold files
pub const GOLD_SOURCES: &[GoldSource] = &[
    GoldSource {
        prefix: "meme",
        task: BaseTask::Task1,
        value_column: "Meme",
    },
    GoldSource {
        prefix: "hate",
        task: BaseTask::Task2,
        value_column: "Hate Speech",
    },
    GoldSource {
        prefix: "event",
        task: BaseTask::Task3,
        value_column: "Event",
    },
];

impl GoldSource {
    /// Find the source a gold file belongs to
    pub fn for_path(path: &Path) -> Option<&'static GoldSource> {
        let name = path.file_name()?.to_str()?;
        GOLD_SOURCES.iter().find(|s| name.starts_with(s.prefix))
    }
}

/// Loader for the gold standard directory
pub struct GoldStandardLoader {
    gold_dir: PathBuf,
    extension: String,
}

impl GoldStandardLoader {
    /// Create a new loader for the given gold directory
    pub fn new(gold_dir: impl AsRef<Path>) -> Self {
        Self {
            gold_dir: gold_dir.as_ref().to_path_buf(),
            extension: crate::submission::DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Use a different tabular file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Load every gold file in the directory.
    ///
    /// Any tabular file whose name matches no known prefix aborts the load,
    /// since it means the gold directory was set up wrongly.
    pub fn load(&self) -> EvalResult<GoldStandards> {
        if !self.gold_dir.is_dir() {
            return Err(EvalError::config(format!(
                "gold directory {:?} does not exist",
                self.gold_dir
            )));
        }

        let mut gold = GoldStandards::new();

        for entry in WalkDir::new(&self.gold_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| EvalError::Walk {
                path: self.gold_dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if !is_tabular_file(path, &self.extension) {
                continue;
            }

            let source = GoldSource::for_path(path).ok_or_else(|| EvalError::InvalidGoldFile {
                path: path.to_path_buf(),
            })?;
            let table = Self::load_file(path, source)?;
            tracing::debug!(
                "loaded {} gold labels for {} from {:?}",
                table.len(),
                source.task,
                path
            );
            gold.insert(source.task, table);
        }

        Ok(gold)
    }

    /// Load one gold file
    pub fn load_file(path: &Path, source: &GoldSource) -> EvalResult<GoldTable> {
        let table = LabelTable::from_columns(path, FILE_COLUMN, source.value_column)?;
        Ok(GoldTable::from_table(table))
    }
}

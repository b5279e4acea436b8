//! Gold standard tables
//!
//! One table per base task, keyed by file identifier.

mod loader;

pub use loader::{GOLD_SOURCES, GoldSource, GoldStandardLoader};

use std::collections::HashMap;

use crate::submission::{BaseTask, Label, LabelTable};

/// Gold labels of one task, keyed by file identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoldTable {
    entries: HashMap<String, Option<Label>>,
}

impl GoldTable {
    /// Build from table rows; a repeated identifier keeps its last value
    pub fn from_table(table: LabelTable) -> Self {
        let entries = table
            .rows
            .into_iter()
            .map(|row| (row.file, row.label))
            .collect();
        Self { entries }
    }

    /// Gold label for a file, `None` when the file is not in the test set
    /// or its gold value is missing
    pub fn gold_for(&self, file: &str) -> Option<&Label> {
        self.entries.get(file).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Label)> for GoldTable {
    fn from_iter<I: IntoIterator<Item = (S, Label)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(file, label)| (file.into(), Some(label)))
                .collect(),
        }
    }
}

/// Gold tables for every base task found in the gold directory
#[derive(Debug, Clone, Default)]
pub struct GoldStandards {
    tables: HashMap<BaseTask, GoldTable>,
}

impl GoldStandards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, task: BaseTask, table: GoldTable) {
        self.tables.insert(task, table);
    }

    /// Builder-style insert
    pub fn with_table(mut self, task: BaseTask, table: GoldTable) -> Self {
        self.insert(task, table);
        self
    }

    pub fn get(&self, task: BaseTask) -> Option<&GoldTable> {
        self.tables.get(&task)
    }

    /// Base tasks that have a gold table, sorted
    pub fn tasks(&self) -> Vec<BaseTask> {
        let mut tasks: Vec<BaseTask> = self.tables.keys().copied().collect();
        tasks.sort();
        tasks
    }
}

//! Alignment of a label submission with its gold table

use serde::{Deserialize, Serialize};

use crate::gold::GoldTable;
use crate::submission::{Label, LabelTable};

/// One submission row next to its gold label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRecord {
    pub file: String,
    pub predicted: Option<Label>,
    pub gold: Option<Label>,
}

/// Counts of rows where one side of the join is missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanityCheck {
    /// Rows whose predicted label is missing
    pub missing_labels: usize,
    /// Rows whose file is not part of the test set
    pub outside_test_set: usize,
}

/// Submission rows left-joined with the gold table on the file identifier.
///
/// Every submission row is kept, in file order, including duplicates; gold
/// files the submission never mentions do not appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinedTable {
    pub records: Vec<JoinedRecord>,
}

impl JoinedTable {
    pub fn left_join(submission: &LabelTable, gold: &GoldTable) -> Self {
        let records = submission
            .rows
            .iter()
            .map(|row| JoinedRecord {
                file: row.file.clone(),
                predicted: row.label.clone(),
                gold: gold.gold_for(&row.file).cloned(),
            })
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn sanity_check(&self) -> SanityCheck {
        SanityCheck {
            missing_labels: self.records.iter().filter(|r| r.predicted.is_none()).count(),
            outside_test_set: self.records.iter().filter(|r| r.gold.is_none()).count(),
        }
    }

    pub fn gold_column(&self) -> Vec<Option<Label>> {
        self.records.iter().map(|r| r.gold.clone()).collect()
    }

    pub fn predicted_column(&self) -> Vec<Option<Label>> {
        self.records.iter().map(|r| r.predicted.clone()).collect()
    }
}

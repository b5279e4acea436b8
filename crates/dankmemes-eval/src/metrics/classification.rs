//! Precision, recall and F1 for aligned label sequences
//!
//! Follows the conventions of the metric library the task was originally
//! scored with: undefined values are rejected rather than skipped, binary
//! averaging only accepts two classes, and every 0/0 ratio is 0.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::types::{MetricError, PrfScores, Side, safe_div};

/// Confusion counts for one positive class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryConfusion {
    pub true_positives: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
    pub true_negatives: u64,
}

impl BinaryConfusion {
    /// Record one (gold, predicted) outcome
    pub fn record(&mut self, gold_positive: bool, predicted_positive: bool) {
        match (gold_positive, predicted_positive) {
            (true, true) => self.true_positives += 1,
            (false, true) => self.false_positives += 1,
            (true, false) => self.false_negatives += 1,
            (false, false) => self.true_negatives += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.true_positives + self.false_positives + self.false_negatives + self.true_negatives
    }

    pub fn precision(&self) -> f64 {
        let tp = self.true_positives as f64;
        safe_div(tp, tp + self.false_positives as f64)
    }

    pub fn recall(&self) -> f64 {
        let tp = self.true_positives as f64;
        safe_div(tp, tp + self.false_negatives as f64)
    }

    pub fn f1(&self) -> f64 {
        let tp = self.true_positives as f64;
        safe_div(
            2.0 * tp,
            2.0 * tp + self.false_positives as f64 + self.false_negatives as f64,
        )
    }

    pub fn scores(&self) -> PrfScores {
        PrfScores::new(self.precision(), self.recall(), self.f1())
    }
}

/// Unwrap a column of optional values, failing if any is undefined
pub fn require_defined<L>(values: &[Option<L>], side: Side) -> Result<Vec<&L>, MetricError> {
    let defined: Vec<&L> = values.iter().flatten().collect();
    let missing = values.len() - defined.len();
    if missing > 0 {
        return Err(MetricError::UndefinedValue {
            side,
            count: missing,
        });
    }
    Ok(defined)
}

/// Binary precision/recall/F1 of `pos_label`
pub fn binary_prf<L: Ord + std::fmt::Display>(
    gold: &[L],
    predicted: &[L],
    pos_label: &L,
) -> Result<PrfScores, MetricError> {
    check_lengths(gold, predicted)?;

    let present = present_labels(gold, predicted);
    if present.len() > 2 {
        return Err(MetricError::NotBinary {
            found: present.len(),
        });
    }
    if present.len() == 2 && !present.contains(pos_label) {
        return Err(MetricError::MissingPositiveLabel {
            pos_label: pos_label.to_string(),
            present: present.iter().map(|l| l.to_string()).collect(),
        });
    }

    let mut confusion = BinaryConfusion::default();
    for (g, p) in gold.iter().zip(predicted) {
        confusion.record(g == pos_label, p == pos_label);
    }
    Ok(confusion.scores())
}

/// Macro-averaged precision/recall/F1 over every class seen on either side
pub fn macro_prf<L: Ord>(gold: &[L], predicted: &[L]) -> Result<PrfScores, MetricError> {
    check_lengths(gold, predicted)?;

    let classes = present_labels(gold, predicted);
    let mut sums = (0.0, 0.0, 0.0);
    for class in &classes {
        let mut confusion = BinaryConfusion::default();
        for (g, p) in gold.iter().zip(predicted) {
            confusion.record(g == *class, p == *class);
        }
        sums.0 += confusion.precision();
        sums.1 += confusion.recall();
        sums.2 += confusion.f1();
    }

    let n = classes.len() as f64;
    Ok(PrfScores::new(sums.0 / n, sums.1 / n, sums.2 / n))
}

fn check_lengths<L>(gold: &[L], predicted: &[L]) -> Result<(), MetricError> {
    if gold.len() != predicted.len() {
        return Err(MetricError::LengthMismatch {
            gold: gold.len(),
            predicted: predicted.len(),
        });
    }
    if gold.is_empty() {
        return Err(MetricError::Empty);
    }
    Ok(())
}

fn present_labels<'a, L: Ord>(gold: &'a [L], predicted: &'a [L]) -> BTreeSet<&'a L> {
    gold.iter().chain(predicted).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::Label;

    fn labels(values: &[i64]) -> Vec<Label> {
        values.iter().map(|v| Label::from(*v)).collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_binary_prf() {
        let gold = labels(&[1, 1, 0, 0, 1]);
        let pred = labels(&[1, 0, 1, 0, 1]);
        let scores = binary_prf(&gold, &pred, &Label::from(1)).unwrap();

        // tp=2 fp=1 fn=1
        assert_close(scores.precision, 2.0 / 3.0);
        assert_close(scores.recall, 2.0 / 3.0);
        assert_close(scores.f1, 2.0 / 3.0);
    }

    #[test]
    fn test_binary_no_positive_predictions() {
        let gold = labels(&[1, 0]);
        let pred = labels(&[0, 0]);
        let scores = binary_prf(&gold, &pred, &Label::from(1)).unwrap();
        assert_eq!(scores, PrfScores::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_binary_single_class_without_positive() {
        let gold = labels(&[0, 0]);
        let pred = labels(&[0, 0]);
        let scores = binary_prf(&gold, &pred, &Label::from(1)).unwrap();
        assert_eq!(scores, PrfScores::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_binary_rejects_multiclass() {
        let gold = labels(&[0, 1, 2]);
        let pred = labels(&[0, 1, 1]);
        assert_eq!(
            binary_prf(&gold, &pred, &Label::from(1)),
            Err(MetricError::NotBinary { found: 3 })
        );
    }

    #[test]
    fn test_binary_rejects_missing_positive_label() {
        let gold = labels(&[0, 2]);
        let pred = labels(&[2, 0]);
        assert!(matches!(
            binary_prf(&gold, &pred, &Label::from(1)),
            Err(MetricError::MissingPositiveLabel { .. })
        ));
    }

    #[test]
    fn test_macro_prf() {
        let gold = labels(&[0, 0, 1, 1, 2]);
        let pred = labels(&[0, 1, 1, 1, 0]);
        let scores = macro_prf(&gold, &pred).unwrap();

        // class 0: p=1/2 r=1/2 f=1/2
        // class 1: p=2/3 r=1   f=4/5
        // class 2: p=0   r=0   f=0
        assert_close(scores.precision, (0.5 + 2.0 / 3.0) / 3.0);
        assert_close(scores.recall, 1.5 / 3.0);
        assert_close(scores.f1, 1.3 / 3.0);
    }

    #[test]
    fn test_macro_counts_prediction_only_classes() {
        let gold = labels(&[0, 0]);
        let pred = labels(&[0, 5]);
        let scores = macro_prf(&gold, &pred).unwrap();
        // class 0: p=1 r=1/2; class 5: p=0 r=0
        assert_close(scores.precision, 0.5);
        assert_close(scores.recall, 0.25);
    }

    #[test]
    fn test_require_defined() {
        let values = vec![Some(Label::from(1)), None, None];
        assert_eq!(
            require_defined(&values, Side::Predicted),
            Err(MetricError::UndefinedValue {
                side: Side::Predicted,
                count: 2
            })
        );

        let values = vec![Some(Label::from(1))];
        assert_eq!(require_defined(&values, Side::Gold).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_and_mismatched_input() {
        let empty: Vec<Label> = Vec::new();
        assert_eq!(macro_prf(&empty, &empty), Err(MetricError::Empty));
        assert!(matches!(
            binary_prf(&labels(&[1]), &empty, &Label::from(1)),
            Err(MetricError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_confusion_counts() {
        let mut confusion = BinaryConfusion::default();
        confusion.record(true, true);
        confusion.record(false, false);
        confusion.record(false, true);
        assert_eq!(confusion.total(), 3);
        assert_close(confusion.precision(), 0.5);
        assert_close(confusion.recall(), 1.0);
    }
}

//! Pair-counting evaluation of a clustering
//!
//! Each pair of items is a binary decision: "same cluster" or not. The gold
//! clustering supplies the truth and the predicted clustering the guess
//! (Manning et al., Introduction to Information Retrieval, 2008, §16.3).

use super::classification::BinaryConfusion;
use super::types::{MetricError, PrfScores};

/// Confusion counts over every ordered pair `(i, j)` with `i != j`.
///
/// Two items are co-clustered only when both carry a defined label and the
/// labels are equal; an undefined label never matches, not even another
/// undefined one.
///
/// Ordered pairs count each unordered pair twice: the counts double, the
/// ratios do not move.
pub fn pairwise_confusion<L: PartialEq>(
    gold: &[Option<L>],
    predicted: &[Option<L>],
) -> Result<BinaryConfusion, MetricError> {
    if gold.len() != predicted.len() {
        return Err(MetricError::LengthMismatch {
            gold: gold.len(),
            predicted: predicted.len(),
        });
    }

    let n = gold.len();
    let mut confusion = BinaryConfusion::default();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            confusion.record(
                co_clustered(&gold[i], &gold[j]),
                co_clustered(&predicted[i], &predicted[j]),
            );
        }
    }

    Ok(confusion)
}

/// Pairwise precision/recall/F1 of a clustering against the gold clustering
pub fn pairwise_prf<L: PartialEq>(
    gold: &[Option<L>],
    predicted: &[Option<L>],
) -> Result<PrfScores, MetricError> {
    let confusion = pairwise_confusion(gold, predicted)?;
    if confusion.total() == 0 {
        return Err(MetricError::Empty);
    }
    Ok(confusion.scores())
}

fn co_clustered<L: PartialEq>(a: &Option<L>, b: &Option<L>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[u32]) -> Vec<Option<u32>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_single_cluster_is_perfect() {
        let gold = some(&[7, 7, 7]);
        let pred = some(&[1, 1, 1]);
        let confusion = pairwise_confusion(&gold, &pred).unwrap();

        assert_eq!(confusion.total(), 6);
        assert_eq!(confusion.true_positives, 6);
        assert_eq!(pairwise_prf(&gold, &pred).unwrap(), PrfScores::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_ordered_pairs_double_count() {
        // gold {a,b} {c}; predicted {a} {b,c}
        let gold = some(&[0, 0, 1]);
        let pred = some(&[0, 1, 1]);
        let confusion = pairwise_confusion(&gold, &pred).unwrap();

        assert_eq!(confusion.true_positives, 0);
        assert_eq!(confusion.false_positives, 2);
        assert_eq!(confusion.false_negatives, 2);
        assert_eq!(confusion.true_negatives, 2);
        assert_eq!(pairwise_prf(&gold, &pred).unwrap(), PrfScores::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_partial_agreement() {
        // gold {a,b,c} {d}; predicted {a,b} {c,d}
        let gold = some(&[0, 0, 0, 1]);
        let pred = some(&[5, 5, 6, 6]);
        let scores = pairwise_prf(&gold, &pred).unwrap();

        // unordered: tp=1 (ab), fp=1 (cd), fn=2 (ac, bc)
        assert!((scores.precision - 0.5).abs() < 1e-12);
        assert!((scores.recall - 1.0 / 3.0).abs() < 1e-12);
        assert!((scores.f1 - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_undefined_labels_never_match() {
        let gold: Vec<Option<u32>> = vec![None, None];
        let pred = some(&[1, 1]);
        let confusion = pairwise_confusion(&gold, &pred).unwrap();
        assert_eq!(confusion.false_positives, 2);
        assert_eq!(confusion.true_positives, 0);
    }

    #[test]
    fn test_too_few_items() {
        let gold = some(&[1]);
        assert_eq!(pairwise_prf(&gold, &gold), Err(MetricError::Empty));
    }
}

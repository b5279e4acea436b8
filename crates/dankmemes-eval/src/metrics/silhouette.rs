//! Silhouette coefficient over precomputed distances

use std::collections::HashMap;
use std::hash::Hash;

use super::distance::DistanceMatrix;
use super::types::MetricError;

/// Mean silhouette coefficient of all samples.
///
/// For sample `i` in cluster `C`, `a(i)` is the mean distance to the other
/// members of `C` and `b(i)` the smallest mean distance to the members of any
/// other cluster; `s(i) = (b - a) / max(a, b)`. Samples alone in their
/// cluster score 0.
///
/// The diagonal is never read, so an unset self distance counts as 0.
/// Undefined distances are left out of the means. A sample for which `a` or
/// `b` has no defined distance at all scores 0.
pub fn silhouette_score<L: Eq + Hash>(
    matrix: &DistanceMatrix,
    labels: &[L],
) -> Result<f64, MetricError> {
    let n = labels.len();
    if matrix.size() != n {
        return Err(MetricError::ShapeMismatch {
            matrix: matrix.size(),
            labels: n,
        });
    }

    let mut cluster_ids: HashMap<&L, usize> = HashMap::new();
    let assignments: Vec<usize> = labels
        .iter()
        .map(|label| {
            let next = cluster_ids.len();
            *cluster_ids.entry(label).or_insert(next)
        })
        .collect();

    let clusters = cluster_ids.len();
    if clusters < 2 || clusters + 1 > n {
        return Err(MetricError::InvalidClusterCount {
            clusters,
            max: n.saturating_sub(1),
        });
    }

    let mut sizes = vec![0usize; clusters];
    for &c in &assignments {
        sizes[c] += 1;
    }

    let total: f64 = (0..n)
        .map(|i| sample_silhouette(i, matrix, &assignments, &sizes))
        .sum();
    Ok(total / n as f64)
}

fn sample_silhouette(
    i: usize,
    matrix: &DistanceMatrix,
    assignments: &[usize],
    sizes: &[usize],
) -> f64 {
    let own = assignments[i];
    if sizes[own] <= 1 {
        return 0.0;
    }

    // (sum, defined count) of distances from `i` to each cluster
    let mut sums = vec![(0.0f64, 0usize); sizes.len()];
    for (j, &cluster) in assignments.iter().enumerate() {
        if j == i {
            continue;
        }
        if let Some(d) = matrix.get(i, j) {
            sums[cluster].0 += d;
            sums[cluster].1 += 1;
        }
    }

    let mean = |(sum, count): (f64, usize)| (count > 0).then(|| sum / count as f64);

    let Some(a) = mean(sums[own]) else {
        return 0.0;
    };
    let b = sums
        .iter()
        .enumerate()
        .filter(|(cluster, _)| *cluster != own)
        .filter_map(|(_, &entry)| mean(entry))
        .min_by(|x, y| x.total_cmp(y));
    let Some(b) = b else {
        return 0.0;
    };

    let max_ab = a.max(b);
    if max_ab == 0.0 {
        0.0
    } else {
        (b - a) / max_ab
    }
}

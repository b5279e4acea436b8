//! Scoring metrics
//!
//! Classification scores for the labelled tasks, pair counting for cluster
//! assignments, and the silhouette coefficient for distance submissions.

mod classification;
mod distance;
mod pairwise;
mod silhouette;
mod types;

pub use classification::{BinaryConfusion, binary_prf, macro_prf, require_defined};
pub use distance::DistanceMatrix;
pub use pairwise::{pairwise_confusion, pairwise_prf};
pub use silhouette::silhouette_score;
pub use types::{MetricError, PrfScores, Side, round_to};

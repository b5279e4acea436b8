//! Core metric types for evaluation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which side of an aligned label pair a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Ground truth
    Gold,
    /// Prediction
    Predicted,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Gold => write!(f, "gold"),
            Side::Predicted => write!(f, "predicted"),
        }
    }
}

/// Reasons a metric cannot be computed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    #[error("{side} labels contain {count} undefined value(s)")]
    UndefinedValue { side: Side, count: usize },

    #[error("gold and predicted labels differ in length ({gold} vs {predicted})")]
    LengthMismatch { gold: usize, predicted: usize },

    #[error("no samples to score")]
    Empty,

    #[error("binary averaging needs at most 2 classes, found {found}")]
    NotBinary { found: usize },

    #[error("positive label \"{pos_label}\" is not among the labels {present:?}")]
    MissingPositiveLabel {
        pos_label: String,
        present: Vec<String>,
    },

    #[error("number of clusters is {clusters}; valid values are 2 to {max} (inclusive)")]
    InvalidClusterCount { clusters: usize, max: usize },

    #[error("distance matrix is {matrix}x{matrix} but there are {labels} cluster labels")]
    ShapeMismatch { matrix: usize, labels: usize },
}

/// Precision, recall and F1 of one averaging strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrfScores {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl PrfScores {
    pub fn new(precision: f64, recall: f64, f1: f64) -> Self {
        Self {
            precision,
            recall,
            f1,
        }
    }

    /// Round every score to the given number of decimals
    pub fn rounded(&self, decimals: usize) -> Self {
        Self {
            precision: round_to(self.precision, decimals),
            recall: round_to(self.recall, decimals),
            f1: round_to(self.f1, decimals),
        }
    }
}

/// Round to a number of decimals using the exact decimal expansion
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Ratio that is 0 when the denominator is 0
pub(crate) fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

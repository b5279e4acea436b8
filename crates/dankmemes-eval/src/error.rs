//! Error types for the evaluation engine
//!
//! Only conditions that abort a whole run surface as [`EvalError`]. Problems
//! confined to a single submission are reported as warnings and the batch
//! carries on.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Main error type for the evaluation engine
#[derive(Error, Debug)]
pub enum EvalError {
    /// Configuration is incomplete or points at something unusable
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Filesystem errors
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing errors
    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A table lacks a column it must have
    #[error("{} has no column named \"{column}\"", path.display())]
    MissingColumn { path: PathBuf, column: String },

    /// A cell could not be interpreted
    #[error("{}: invalid value {value:?} in column \"{column}\"", path.display())]
    InvalidValue {
        path: PathBuf,
        column: String,
        value: String,
    },

    /// A file in the gold directory matches no known gold prefix
    #[error(
        "\"{}\" is not a valid filename for a gold standard file. Please fix this.",
        path.display()
    )]
    InvalidGoldFile { path: PathBuf },

    /// Walking a directory failed
    #[error("Failed to scan {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Report serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file parsing errors
    #[error("TOML error in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl EvalError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap a CSV error with the file it happened in
    pub fn csv(path: impl AsRef<Path>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a missing column error
    pub fn missing_column(path: impl AsRef<Path>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            path: path.as_ref().to_path_buf(),
            column: column.into(),
        }
    }

    /// Create an invalid cell value error
    pub fn invalid_value(
        path: impl AsRef<Path>,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            path: path.as_ref().to_path_buf(),
            column: column.into(),
            value: value.into(),
        }
    }

    /// Check whether the error came from a file that does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            EvalError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            EvalError::Csv { source, .. } => match source.kind() {
                csv::ErrorKind::Io(err) => err.kind() == std::io::ErrorKind::NotFound,
                _ => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gold_file_message() {
        let err = EvalError::InvalidGoldFile {
            path: PathBuf::from("gold/random.csv"),
        };
        assert_eq!(
            err.to_string(),
            "\"gold/random.csv\" is not a valid filename for a gold standard file. Please fix this."
        );
    }

    #[test]
    fn test_is_not_found() {
        let err = EvalError::io(
            "missing.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.is_not_found());
        assert!(!EvalError::config("nope").is_not_found());
    }
}

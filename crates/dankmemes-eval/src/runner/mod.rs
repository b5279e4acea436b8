//! Evaluation runner components
//!
//! Configuration and the executor that drives a complete run.

mod config;
mod executor;

pub use config::EvalConfig;
pub use executor::{EvalExecutor, EvalProgress, ProgressCallback};

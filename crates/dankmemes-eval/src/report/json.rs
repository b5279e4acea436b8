//! JSON report generation

use super::EvaluationSummary;
use crate::error::EvalResult;

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Generate a JSON report
    pub fn generate(summary: &EvaluationSummary) -> EvalResult<String> {
        let json = serde_json::to_string_pretty(summary)?;
        Ok(json)
    }
}

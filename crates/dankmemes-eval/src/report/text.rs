//! Plain text scoreboard
//!
//! One block per scored submission, each closed by a divider line.

use std::io::{self, Write};

use super::format_float;
use crate::metrics::PrfScores;
use crate::scoring::{MetricKind, MetricOutcome, SanityCheck, SubmissionReport};

/// Line closing every block
pub const DIVIDER: &str = "******************************************************************************* ";

/// Text report generator
pub struct TextReporter;

impl TextReporter {
    /// Append one block to an open output stream
    pub fn write_block<W: Write>(out: &mut W, report: &SubmissionReport) -> io::Result<()> {
        out.write_all(Self::render_block(report).as_bytes())
    }

    /// Render the block of one submission
    pub fn render_block(report: &SubmissionReport) -> String {
        let mut text = String::new();
        let meta = &report.metadata;

        text.push_str(&format!(
            "TEAM: {}\nTASK: {}\nRUN: {}\n\n",
            meta.team_name, meta.task_name, meta.run_id
        ));

        if let Some(sanity) = report.sanity {
            push_sanity(&mut text, sanity);
        }

        for notice in &report.notices {
            text.push_str(&format!("Warning: {}\n\n", notice));
        }

        match (&report.evaluation.kind, &report.evaluation.outcome) {
            (MetricKind::MacroAveraged, MetricOutcome::Scores(scores)) => {
                push_scores(&mut text, scores, "MACRO-AVERAGED ");
            }
            (_, MetricOutcome::Scores(scores)) => push_scores(&mut text, scores, ""),
            (_, MetricOutcome::Silhouette { score }) => {
                text.push_str(&format!("Silhouette Score: {}\n\n", format_float(*score)));
            }
            (MetricKind::Silhouette, MetricOutcome::Unavailable { reason }) => {
                text.push_str(&format!("Silhouette Score: unavailable ({})\n\n", reason));
            }
            (_, MetricOutcome::Unavailable { reason }) => {
                text.push_str(&format!("Model Evaluation:\n- unavailable: {}\n\n", reason));
            }
        }

        text.push_str(DIVIDER);
        text.push('\n');
        text
    }
}

fn push_sanity(text: &mut String, sanity: SanityCheck) {
    text.push_str("Sanity Check:\n");
    text.push_str(&format!(
        "- number of missing Labels:{}\n",
        sanity.missing_labels
    ));
    text.push_str(&format!(
        "- number of Labels NOT belonging to the test set:{}\n\n",
        sanity.outside_test_set
    ));
}

fn push_scores(text: &mut String, scores: &PrfScores, qualifier: &str) {
    text.push_str("Model Evaluation:\n");
    text.push_str(&format!(
        "- {}PRECISION: {}\n",
        qualifier,
        format_float(scores.precision)
    ));
    text.push_str(&format!(
        "- {}RECALL: {}\n",
        qualifier,
        format_float(scores.recall)
    ));
    text.push_str(&format!(
        "- {}F1 SCORE: {}\n\n",
        qualifier,
        format_float(scores.f1)
    ));
}

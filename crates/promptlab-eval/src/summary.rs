use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::evaluator::Evaluation;

/// Scalar projection of an evaluation, for cross-variant comparison.
///
/// The fields read through from the nested reports. They are optional so
/// records stored by older runs still deserialize; a freshly computed
/// evaluation always has all four.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    #[serde(default)]
    pub accuracy_score: Option<u8>,
    #[serde(default)]
    pub completeness_pct: Option<f64>,
    #[serde(default)]
    pub token_count: Option<u32>,
    #[serde(default)]
    pub issue_count: Option<usize>,
}

/// One flat comparison row, one per variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub variant: String,
    pub accuracy_score: Option<u8>,
    pub completeness_pct: Option<f64>,
    pub token_count: Option<u32>,
    pub issues_found: Option<usize>,
    pub clarity: Option<u8>,
}

/// Project evaluations into flat rows, preserving the map's iteration
/// order. Missing summary fields become `None`; the presentation layer
/// renders those with a sentinel rather than failing.
pub fn summary_rows(evaluations: &IndexMap<String, Evaluation>) -> Vec<SummaryRow> {
    evaluations
        .iter()
        .map(|(variant, evaluation)| SummaryRow {
            variant: variant.clone(),
            accuracy_score: evaluation.summary.accuracy_score,
            completeness_pct: evaluation.summary.completeness_pct,
            token_count: evaluation.summary.token_count,
            issues_found: evaluation.summary.issue_count,
            clarity: evaluation.clarity_score,
        })
        .collect()
}

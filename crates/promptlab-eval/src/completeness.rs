use serde::{Deserialize, Serialize};

use crate::matching::split_matched;

/// Checklist coverage of a response, on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessReport {
    /// Covered fraction as a percentage, rounded to 1 decimal.
    pub percentage: f64,
    pub covered_items: Vec<String>,
    pub missing_items: Vec<String>,
}

/// Score checklist coverage with the same keyword matching as accuracy,
/// reported as a percentage rather than an ordinal grade. An empty
/// checklist yields 0.
pub fn score_completeness(response: &str, checklist: &[String]) -> CompletenessReport {
    let (covered, missing) = split_matched(response, checklist);

    let percentage = if checklist.is_empty() {
        0.0
    } else {
        covered.len() as f64 / checklist.len() as f64 * 100.0
    };

    CompletenessReport {
        percentage: round1(percentage),
        covered_items: covered,
        missing_items: missing,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

use serde::{Deserialize, Serialize};

use crate::matching::split_matched;

/// Accuracy of a response against the experiment's key concepts.
///
/// `score` is an ordinal grade derived from the fraction of criteria
/// matched: 0 = wrong, 1 = partial, 2 = fully correct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    pub score: u8,
    /// Matched fraction, rounded to 2 decimals.
    pub ratio: f64,
    pub matched_criteria: Vec<String>,
    pub missing_criteria: Vec<String>,
}

/// Score a response by keyword presence of each criterion.
///
/// The thresholds are policy constants: ratio >= 0.8 scores 2,
/// >= 0.4 scores 1, anything lower 0. An empty criteria list is valid
/// and yields ratio 0, score 0.
pub fn score_accuracy(response: &str, criteria: &[String]) -> AccuracyReport {
    let (matched, missing) = split_matched(response, criteria);

    let ratio = if criteria.is_empty() {
        0.0
    } else {
        matched.len() as f64 / criteria.len() as f64
    };
    let score = if ratio >= 0.8 {
        2
    } else if ratio >= 0.4 {
        1
    } else {
        0
    };

    AccuracyReport {
        score,
        ratio: round2(ratio),
        matched_criteria: matched,
        missing_criteria: missing,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

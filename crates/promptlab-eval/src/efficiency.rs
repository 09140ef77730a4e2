use std::fmt;

use serde::{Deserialize, Serialize};

/// Conciseness bucket, a step function of token count alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EfficiencyRating {
    Concise,
    Moderate,
    Verbose,
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EfficiencyRating::Concise => "Concise",
            EfficiencyRating::Moderate => "Moderate",
            EfficiencyRating::Verbose => "Verbose",
        };
        f.write_str(label)
    }
}

/// How economically a response used its tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyReport {
    pub token_count: u32,
    pub word_count: usize,
    /// Words per token, rounded to 2 decimals; 0 when the token count is 0.
    pub words_per_token: f64,
    pub efficiency_rating: EfficiencyRating,
}

/// Rate token efficiency. Bucket thresholds are fixed: under 200 tokens
/// is Concise, under 500 Moderate, everything else Verbose.
pub fn score_efficiency(response: &str, token_count: u32) -> EfficiencyReport {
    let word_count = response.split_whitespace().count();
    let words_per_token = if token_count > 0 {
        word_count as f64 / token_count as f64
    } else {
        0.0
    };

    let efficiency_rating = if token_count < 200 {
        EfficiencyRating::Concise
    } else if token_count < 500 {
        EfficiencyRating::Moderate
    } else {
        EfficiencyRating::Verbose
    };

    EfficiencyReport {
        token_count,
        word_count,
        words_per_token: round2(words_per_token),
        efficiency_rating,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

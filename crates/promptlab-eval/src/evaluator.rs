use serde::{Deserialize, Serialize};

use promptlab_config::EvaluationConfig;
use promptlab_core::Generation;

use crate::accuracy::{score_accuracy, AccuracyReport};
use crate::completeness::{score_completeness, CompletenessReport};
use crate::efficiency::{score_efficiency, EfficiencyReport};
use crate::failures::{detect_failures, FailureReport};
use crate::store::CriteriaStore;
use crate::summary::EvaluationSummary;

/// The full scoring record for one response.
///
/// `summary` is a read-through projection of the four nested reports,
/// kept alongside them for cheap cross-variant comparison. It is filled
/// by [`ResponseEvaluator::evaluate`] and never computed independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub accuracy: AccuracyReport,
    pub completeness: CompletenessReport,
    pub token_efficiency: EfficiencyReport,
    pub failure_behaviors: FailureReport,
    /// Peer-rated clarity, 1-5. Supplied externally, never computed.
    pub clarity_score: Option<u8>,
    pub summary: EvaluationSummary,
}

/// Scores responses against a fixed [`CriteriaStore`].
///
/// The store is loaded once at construction and read-only afterwards,
/// so one evaluator can score any number of responses, from any thread.
/// Evaluation is deterministic: same criteria, same response, same record.
#[derive(Debug, Clone)]
pub struct ResponseEvaluator {
    criteria: CriteriaStore,
}

impl ResponseEvaluator {
    pub fn new(accuracy_criteria: Vec<String>, completeness_checklist: Vec<String>) -> Self {
        Self::from_store(CriteriaStore::new(accuracy_criteria, completeness_checklist))
    }

    pub fn from_store(criteria: CriteriaStore) -> Self {
        Self { criteria }
    }

    pub fn from_config(config: &EvaluationConfig) -> Self {
        Self::from_store(CriteriaStore::from_config(config))
    }

    pub fn criteria(&self) -> &CriteriaStore {
        &self.criteria
    }

    pub fn accuracy_criteria(&self) -> &[String] {
        self.criteria.accuracy_criteria()
    }

    pub fn completeness_checklist(&self) -> &[String] {
        self.criteria.completeness_checklist()
    }

    /// Run all four scorers on a response and assemble the record.
    ///
    /// `token_count` comes from the model client; the evaluator does not
    /// tokenize. `clarity_score` is an optional external rating.
    pub fn evaluate(
        &self,
        response: &str,
        token_count: u32,
        clarity_score: Option<u8>,
    ) -> Evaluation {
        let accuracy = score_accuracy(response, self.criteria.accuracy_criteria());
        let completeness = score_completeness(response, self.criteria.completeness_checklist());
        let token_efficiency = score_efficiency(response, token_count);
        let failure_behaviors = detect_failures(response);

        let summary = EvaluationSummary {
            accuracy_score: Some(accuracy.score),
            completeness_pct: Some(completeness.percentage),
            token_count: Some(token_efficiency.token_count),
            issue_count: Some(failure_behaviors.issue_count),
        };

        Evaluation {
            accuracy,
            completeness,
            token_efficiency,
            failure_behaviors,
            clarity_score,
            summary,
        }
    }

    /// Evaluate a model generation, taking the token count it reported.
    pub fn evaluate_generation(
        &self,
        generation: &Generation,
        clarity_score: Option<u8>,
    ) -> Evaluation {
        self.evaluate(&generation.text, generation.token_count, clarity_score)
    }
}

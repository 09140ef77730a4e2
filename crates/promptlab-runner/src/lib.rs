//! Experiment orchestration: take a configured experiment, render each
//! prompt variant, send it to the model, and score the response.
//!
//! The runner is deliberately sequential; variants go to the same model
//! one at a time so rate limits stay predictable and the comparison is
//! apples to apples.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use promptlab_config::ExperimentConfig;
use promptlab_core::{CompletionModel, Generation, LabError};
use promptlab_eval::{summary_rows, Evaluation, ResponseEvaluator, SummaryRow};
use promptlab_models::{model_from_config, ProviderBackend};
use promptlab_prompts::{PromptSet, VariantInfo};

/// One variant's trip through the pipeline: the prompt that was sent,
/// what came back, and how it scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRun {
    pub info: VariantInfo,
    pub prompt: String,
    pub generation: Generation,
    pub evaluation: Evaluation,
}

/// The finished experiment: one [`VariantRun`] per variant, in config
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub runs: IndexMap<String, VariantRun>,
}

impl ExperimentReport {
    /// The evaluations alone, keyed by variant id, for the report layer.
    pub fn evaluations(&self) -> IndexMap<String, Evaluation> {
        self.runs
            .iter()
            .map(|(id, run)| (id.clone(), run.evaluation.clone()))
            .collect()
    }

    /// Flat comparison rows, in run order.
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        summary_rows(&self.evaluations())
    }
}

/// Drives one experiment: a prompt set, a model, and an evaluator.
pub struct ExperimentRunner {
    prompts: PromptSet,
    model: Arc<dyn CompletionModel>,
    evaluator: ResponseEvaluator,
}

impl std::fmt::Debug for ExperimentRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExperimentRunner").finish_non_exhaustive()
    }
}

impl ExperimentRunner {
    pub fn new(
        prompts: PromptSet,
        model: Arc<dyn CompletionModel>,
        evaluator: ResponseEvaluator,
    ) -> Self {
        Self {
            prompts,
            model,
            evaluator,
        }
    }

    /// Wire up all layers from an experiment config.
    pub fn from_config(
        config: &ExperimentConfig,
        api_key: &str,
        backend: Arc<dyn ProviderBackend>,
    ) -> Result<Self, LabError> {
        let model = model_from_config(&config.models.primary, api_key, backend)?;
        Ok(Self::new(
            PromptSet::from_config(config),
            model,
            ResponseEvaluator::from_config(&config.evaluation),
        ))
    }

    pub fn prompts(&self) -> &PromptSet {
        &self.prompts
    }

    /// Run a single variant: build its prompt, call the model, evaluate.
    ///
    /// Clarity is left unset; it is a human rating collected after the
    /// run, not something the pipeline can produce.
    pub async fn run_variant(&self, id: &str) -> Result<VariantRun, LabError> {
        let prompt = self.prompts.build(id)?;
        let info = self.prompts.variant_info(id);

        let generation = match self.model.generate(&prompt).await {
            Ok(generation) => generation,
            Err(error) => {
                tracing::error!(variant = %id, error = %error, "generation failed");
                return Err(error);
            }
        };

        let evaluation = self.evaluator.evaluate_generation(&generation, None);
        tracing::info!(
            variant = %id,
            latency_ms = generation.latency_ms,
            token_count = generation.token_count,
            issue_count = evaluation.failure_behaviors.issue_count,
            "variant evaluated"
        );

        Ok(VariantRun {
            info,
            prompt,
            generation,
            evaluation,
        })
    }

    /// Run every variant in config order. Fails on the first variant
    /// whose generation fails; completed runs are dropped with it.
    pub async fn run(&self) -> Result<ExperimentReport, LabError> {
        let mut runs = IndexMap::new();
        for id in self.prompts.variant_ids() {
            let run = self.run_variant(id).await?;
            runs.insert(id.to_string(), run);
        }
        Ok(ExperimentReport { runs })
    }
}

use std::sync::Arc;

use promptlab_config::ExperimentConfig;
use promptlab_core::{Generation, LabError};
use promptlab_eval::ResponseEvaluator;
use promptlab_models::{FakeBackend, ScriptedModel};
use promptlab_prompts::PromptSet;
use promptlab_runner::ExperimentRunner;

const CONFIG: &str = r#"
models:
  primary:
    provider: google
    name: gemini-1.5-flash
prompts:
  P1_direct:
    name: Direct
    description: Just ask.
    template: "{query}"
  P2_context:
    name: With context
    description: Ask with background.
    template: "Context: {context}\n\nQuestion: {query}"
query:
  base: "How should we set the reorder point?"
  context: "Mid-size retailer, Q4 peak season."
evaluation:
  accuracy_criteria:
    - reorder point
    - safety stock
  completeness_checklist:
    - reorder point
    - lead time
"#;

fn runner_with_responses(responses: Vec<Generation>) -> ExperimentRunner {
    let config = ExperimentConfig::from_yaml(CONFIG).unwrap();
    ExperimentRunner::new(
        PromptSet::from_config(&config),
        Arc::new(ScriptedModel::new(responses)),
        ResponseEvaluator::from_config(&config.evaluation),
    )
}

#[tokio::test]
async fn run_variant_builds_prompt_and_scores_response() {
    let runner = runner_with_responses(vec![ScriptedModel::generation(
        "Set the reorder point from demand during lead time plus safety stock.",
    )]);

    let run = runner.run_variant("P1_direct").await.unwrap();
    assert_eq!(run.info.name, "Direct");
    assert_eq!(run.prompt, "How should we set the reorder point?");
    assert_eq!(run.evaluation.accuracy.score, 2);
    assert_eq!(run.evaluation.completeness.percentage, 100.0);
    assert_eq!(run.evaluation.clarity_score, None);
}

#[tokio::test]
async fn run_covers_every_variant_in_config_order() {
    let runner = runner_with_responses(vec![
        ScriptedModel::generation("The reorder point may need a safety stock buffer."),
        ScriptedModel::generation("Definitely raise it."),
    ]);

    let report = runner.run().await.unwrap();
    let ids: Vec<&String> = report.runs.keys().collect();
    assert_eq!(ids, ["P1_direct", "P2_context"]);

    let rows = report.summary_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].variant, "P1_direct");
    assert_eq!(rows[0].accuracy_score, Some(2));
    // The second response is overconfident and has no hedging language.
    assert_eq!(rows[1].issues_found, Some(2));
}

#[tokio::test]
async fn unknown_variant_is_a_prompt_error() {
    let runner = runner_with_responses(vec![]);
    let err = runner.run_variant("P9_missing").await.unwrap_err();
    assert!(matches!(err, LabError::Prompt(_)));
}

#[tokio::test]
async fn model_failure_stops_the_run() {
    // One scripted response for two variants: the second call fails.
    let runner = runner_with_responses(vec![ScriptedModel::generation("fine")]);
    let err = runner.run().await.unwrap_err();
    assert!(matches!(err, LabError::Model(_)));
}

#[tokio::test]
async fn from_config_rejects_unknown_providers() {
    let mut config = ExperimentConfig::from_yaml(CONFIG).unwrap();
    config.models.primary.provider = "acme".to_string();

    let err = ExperimentRunner::from_config(&config, "key", Arc::new(FakeBackend::new(vec![])))
        .unwrap_err();
    assert!(matches!(err, LabError::Config(_)));
}

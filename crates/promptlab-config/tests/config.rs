use promptlab_config::ExperimentConfig;

const SAMPLE: &str = r#"
models:
  primary:
    provider: google
    name: gemini-1.5-flash
    parameters:
      temperature: 0.3
      top_p: 0.9
      max_output_tokens: 512

prompts:
  P1_direct:
    name: Direct Question
    description: Baseline with no scaffolding
    template: "{query}"
  P2_contextual:
    template: "Context: {context}\n\n{query}"

query:
  base: How should we set inventory levels?
  context: Mid-size retailer, seasonal demand.

evaluation:
  accuracy_criteria:
    - demand forecasting
    - safety stock
  completeness_checklist:
    - lead time
"#;

#[test]
fn parses_full_config() {
    let config = ExperimentConfig::from_yaml(SAMPLE).unwrap();
    assert_eq!(config.models.primary.provider, "google");
    assert_eq!(config.models.primary.name, "gemini-1.5-flash");
    assert_eq!(config.models.primary.parameters.temperature, 0.3);
    assert_eq!(config.models.primary.parameters.top_p, 0.9);
    assert_eq!(config.models.primary.parameters.max_output_tokens, 512);
    assert_eq!(config.query.base, "How should we set inventory levels?");
    assert_eq!(config.evaluation.accuracy_criteria.len(), 2);
    assert_eq!(config.evaluation.completeness_checklist, vec!["lead time"]);
}

#[test]
fn prompt_variants_keep_file_order() {
    let config = ExperimentConfig::from_yaml(SAMPLE).unwrap();
    let ids: Vec<&String> = config.prompts.keys().collect();
    assert_eq!(ids, vec!["P1_direct", "P2_contextual"]);
}

#[test]
fn variant_metadata_is_optional() {
    let config = ExperimentConfig::from_yaml(SAMPLE).unwrap();
    let p2 = &config.prompts["P2_contextual"];
    assert!(p2.name.is_none());
    assert!(p2.description.is_none());
    assert_eq!(p2.template, "Context: {context}\n\n{query}");
}

#[test]
fn missing_sections_use_defaults() {
    let config = ExperimentConfig::from_yaml("prompts: {}\n").unwrap();
    assert_eq!(config.models.primary.parameters.temperature, 0.7);
    assert_eq!(config.models.primary.parameters.top_p, 0.95);
    assert_eq!(config.models.primary.parameters.max_output_tokens, 1024);
    assert!(config.prompts.is_empty());
    assert!(config.query.base.is_empty());
    assert!(config.evaluation.accuracy_criteria.is_empty());
}

#[test]
fn missing_parameters_use_defaults() {
    let yaml = r#"
models:
  primary:
    provider: google
    name: gemini-1.5-flash
"#;
    let config = ExperimentConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.models.primary.parameters.temperature, 0.7);
    assert_eq!(config.models.primary.parameters.max_output_tokens, 1024);
}

#[test]
fn invalid_yaml_is_a_config_error() {
    let err = ExperimentConfig::from_yaml("models: [not: a map").unwrap_err();
    assert!(err.to_string().contains("config error"));
}

#[test]
fn template_is_required_for_a_variant() {
    let yaml = r#"
prompts:
  P1_direct:
    name: Direct Question
"#;
    assert!(ExperimentConfig::from_yaml(yaml).is_err());
}

#[test]
fn missing_file_is_a_config_error() {
    let err = ExperimentConfig::from_path("does/not/exist.yaml").unwrap_err();
    assert!(err.to_string().contains("cannot read"));
}

#[test]
fn from_path_reads_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("experiment.yaml");
    std::fs::write(&path, SAMPLE).unwrap();
    let config = ExperimentConfig::from_path(&path).unwrap();
    assert_eq!(config.prompts.len(), 2);
}

use promptlab::config::ExperimentConfig;
use promptlab::core::LabError;
use promptlab::eval::ResponseEvaluator;
use promptlab::report::summary_table;

#[test]
fn facade_reexports_core_types() {
    let err = LabError::Config("test".into());
    assert!(matches!(err, LabError::Config(_)));

    let config = ExperimentConfig::default();
    assert!(config.prompts.is_empty());

    let evaluator = ResponseEvaluator::new(vec!["reorder point".into()], vec![]);
    let evaluation = evaluator.evaluate("the reorder point", 10, Some(4));
    assert_eq!(evaluation.summary.accuracy_score, Some(2));

    // Verify the report layer is accessible through the facade.
    let rows = promptlab::eval::summary_rows(&Default::default());
    let table = summary_table(&rows);
    assert!(table.starts_with("Variant"));
}

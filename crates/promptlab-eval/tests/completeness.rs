use promptlab_eval::score_completeness;

fn checklist(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn reports_percentage_and_sets() {
    let checklist = checklist(&["reorder point", "lead time", "demand forecasting"]);
    let report = score_completeness("Set the reorder point first.", &checklist);

    assert_eq!(report.covered_items, vec!["reorder point"]);
    assert_eq!(
        report.missing_items,
        vec!["lead time", "demand forecasting"]
    );
    // 1/3 * 100 rounded to one decimal
    assert_eq!(report.percentage, 33.3);
}

#[test]
fn every_item_is_classified_once() {
    let checklist = checklist(&["alpha", "bravo", "charlie", "delta"]);
    let report = score_completeness("bravo and delta happened", &checklist);
    assert_eq!(
        report.covered_items.len() + report.missing_items.len(),
        checklist.len()
    );
}

#[test]
fn full_coverage_is_100() {
    let checklist = checklist(&["alpha", "bravo"]);
    let report = score_completeness("alpha bravo", &checklist);
    assert_eq!(report.percentage, 100.0);
    assert!(report.missing_items.is_empty());
}

#[test]
fn empty_checklist_scores_zero() {
    let report = score_completeness("anything", &[]);
    assert_eq!(report.percentage, 0.0);
    assert!(report.covered_items.is_empty());
    assert!(report.missing_items.is_empty());
}

#[test]
fn rounding_is_one_decimal() {
    let checklist = checklist(&["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"]);
    // 1/6 = 16.666..% -> 16.7
    let report = score_completeness("alpha", &checklist);
    assert_eq!(report.percentage, 16.7);
}

use promptlab_eval::{detect_failures, IssueKind, Severity};

#[test]
fn clean_response_has_no_issues() {
    let report = detect_failures("Results may vary depending on demand patterns.");
    assert!(report.issues.is_empty());
    assert_eq!(report.issue_count, 0);
    assert!(!report.has_critical_issues);
}

#[test]
fn flags_overconfidence() {
    let report = detect_failures("This will definitely work and may help.");
    assert_eq!(report.issue_count, 1);
    let issue = &report.issues[0];
    assert_eq!(issue.kind, IssueKind::Overconfidence);
    assert_eq!(issue.severity, Severity::Medium);
    assert_eq!(
        issue.description,
        "Response uses absolute language without hedging uncertainty"
    );
}

#[test]
fn overconfidence_and_missing_hedging_can_co_occur() {
    let report = detect_failures("This is guaranteed to work.");
    let kinds: Vec<IssueKind> = report.issues.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![IssueKind::Overconfidence, IssueKind::MissingUncertaintyLanguage]
    );
}

#[test]
fn flags_too_many_statistics_as_critical() {
    let response =
        "Sales may grow 25% with $500 upfront, a 30% margin, and $2,500.50 million saved plus 12% churn.";
    let report = detect_failures(response);

    let hallucination = report
        .issues
        .iter()
        .find(|i| i.kind == IssueKind::PotentialHallucination)
        .expect("hallucination issue");
    assert_eq!(hallucination.severity, Severity::High);
    assert_eq!(
        hallucination.description,
        "Response contains 5 specific statistics that may need verification"
    );
    assert!(report.has_critical_issues);
}

#[test]
fn three_statistics_are_tolerated() {
    let report = detect_failures("Costs may fall 15% or 20% with $100 saved.");
    assert!(report
        .issues
        .iter()
        .all(|i| i.kind != IssueKind::PotentialHallucination));
}

#[test]
fn single_digit_percentages_are_not_statistics() {
    let report = detect_failures("Perhaps 5% here, 6% there, 7% and 8% and 9% overall, maybe.");
    assert!(report
        .issues
        .iter()
        .all(|i| i.kind != IssueKind::PotentialHallucination));
}

#[test]
fn flags_over_elaboration_with_word_count() {
    let response = format!("may {}", "word ".repeat(650));
    let report = detect_failures(&response);

    let verbose = report
        .issues
        .iter()
        .find(|i| i.kind == IssueKind::OverElaboration)
        .expect("over-elaboration issue");
    assert_eq!(verbose.severity, Severity::Low);
    assert_eq!(
        verbose.description,
        "Response is 651 words, potentially too verbose"
    );
    // Low severity alone is not critical
    assert!(!report.has_critical_issues);
}

#[test]
fn exactly_600_words_is_not_flagged() {
    let response = "may ".repeat(600);
    let report = detect_failures(&response);
    assert!(report
        .issues
        .iter()
        .all(|i| i.kind != IssueKind::OverElaboration));
}

#[test]
fn flags_missing_hedging_language() {
    let report = detect_failures("Set the reorder point to 10 units.");
    assert_eq!(report.issue_count, 1);
    let issue = &report.issues[0];
    assert_eq!(issue.kind, IssueKind::MissingUncertaintyLanguage);
    assert_eq!(issue.severity, Severity::Medium);
    assert_eq!(
        issue.description,
        "Response lacks hedging language for uncertain claims"
    );
}

#[test]
fn detection_is_deterministic() {
    let response = "Absolutely: 25% and 30% and 45% and 60% gains over 700 words...";
    let first = detect_failures(response);
    let second = detect_failures(response);
    assert_eq!(first, second);
}

#[test]
fn empty_response_only_lacks_hedging() {
    let report = detect_failures("");
    let kinds: Vec<IssueKind> = report.issues.iter().map(|i| i.kind).collect();
    assert_eq!(kinds, vec![IssueKind::MissingUncertaintyLanguage]);
    assert!(!report.has_critical_issues);
}

#[test]
fn issue_serializes_with_type_key() {
    let report = detect_failures("This is guaranteed.");
    let json = serde_json::to_value(&report.issues[0]).unwrap();
    assert_eq!(json["type"], "Overconfidence");
    assert_eq!(json["severity"], "Medium");
}

#[test]
fn issue_kind_labels() {
    assert_eq!(IssueKind::Overconfidence.to_string(), "Overconfidence");
    assert_eq!(
        IssueKind::PotentialHallucination.to_string(),
        "Potential Hallucination"
    );
    assert_eq!(IssueKind::OverElaboration.to_string(), "Over-elaboration");
    assert_eq!(
        IssueKind::MissingUncertaintyLanguage.to_string(),
        "Missing Uncertainty Language"
    );
}

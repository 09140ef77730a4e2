//! Heuristic scoring of model responses.
//!
//! Four independent scorers look at each response: keyword-based accuracy
//! (0-2), checklist completeness (0-100%), token efficiency, and a set of
//! failure-behavior checks (overconfidence, suspect statistics, verbosity,
//! missing hedging). [`ResponseEvaluator`] runs all four and assembles one
//! [`Evaluation`] record per response; [`summary_rows`] flattens a set of
//! records into comparable rows.
//!
//! All scoring is substring-based and case-folded, with no stemming or
//! embeddings. It never fails: empty responses, empty criteria lists, and
//! zero token counts all have defined fallbacks.

mod accuracy;
mod completeness;
mod efficiency;
mod evaluator;
mod failures;
mod matching;
mod store;
mod summary;

pub use accuracy::{score_accuracy, AccuracyReport};
pub use completeness::{score_completeness, CompletenessReport};
pub use efficiency::{score_efficiency, EfficiencyRating, EfficiencyReport};
pub use evaluator::{Evaluation, ResponseEvaluator};
pub use failures::{detect_failures, FailureReport, Issue, IssueKind, Severity};
pub use store::CriteriaStore;
pub use summary::{summary_rows, EvaluationSummary, SummaryRow};

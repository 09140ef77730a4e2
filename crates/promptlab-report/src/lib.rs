//! Plain-text presentation of evaluation results: a comparison table, bar
//! charts for accuracy, completeness, and token efficiency, normalized
//! metric profiles, and a variant-by-issue matrix. Everything renders to
//! `String`; callers decide where it goes.

mod bars;
mod issues;
mod profiles;
mod table;

pub use bars::{efficiency_bars, score_bars};
pub use issues::{issue_matrix, IssueMatrix, IssueMatrixRow};
pub use profiles::{metric_profiles, profile_table, MetricProfile};
pub use table::summary_table;

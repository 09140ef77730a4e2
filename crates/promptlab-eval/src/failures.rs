use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Absolute-language markers that flag overconfidence.
const OVERCONFIDENCE_PHRASES: [&str; 7] = [
    "definitely",
    "certainly",
    "absolutely",
    "without a doubt",
    "always",
    "never",
    "guaranteed",
];

/// Hedging markers; their complete absence flags missing uncertainty
/// language.
const HEDGING_PHRASES: [&str; 7] = [
    "may",
    "might",
    "could",
    "typically",
    "often",
    "generally",
    "depending on",
];

/// More statistics fragments than this triggers the hallucination flag.
const STATS_ALERT_THRESHOLD: usize = 3;

/// Responses longer than this many words are flagged as over-elaborated.
const VERBOSE_WORD_LIMIT: usize = 600;

/// Coarse impact rating attached to a detected issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        };
        f.write_str(label)
    }
}

/// The four behaviors the detector looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    Overconfidence,
    #[serde(rename = "Potential Hallucination")]
    PotentialHallucination,
    #[serde(rename = "Over-elaboration")]
    OverElaboration,
    #[serde(rename = "Missing Uncertainty Language")]
    MissingUncertaintyLanguage,
}

impl IssueKind {
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::Overconfidence => "Overconfidence",
            IssueKind::PotentialHallucination => "Potential Hallucination",
            IssueKind::OverElaboration => "Over-elaboration",
            IssueKind::MissingUncertaintyLanguage => "Missing Uncertainty Language",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One detected failure behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub description: String,
    pub severity: Severity,
}

/// All failure behaviors found in one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureReport {
    pub issues: Vec<Issue>,
    pub issue_count: usize,
    pub has_critical_issues: bool,
}

impl FailureReport {
    fn from_issues(issues: Vec<Issue>) -> Self {
        let issue_count = issues.len();
        let has_critical_issues = issues.iter().any(|i| i.severity == Severity::High);
        Self {
            issues,
            issue_count,
            has_critical_issues,
        }
    }
}

/// Standalone 2+-digit percentages, or dollar amounts with optional
/// thousands separators, decimals, and a million/billion qualifier.
fn stats_regex() -> &'static Regex {
    static STATS: OnceLock<Regex> = OnceLock::new();
    STATS.get_or_init(|| {
        Regex::new(r"\b\d{2,}\s*%|\$\d+(?:,\d+)*(?:\.\d+)?(?:\s*(?:million|billion))?\b")
            .expect("hard-coded pattern compiles")
    })
}

/// Run the four failure checks against a response.
///
/// The checks are independent and non-exclusive; a response can be both
/// overconfident and missing hedging language. They always run in the
/// same order, so the issue list is deterministic.
pub fn detect_failures(response: &str) -> FailureReport {
    let response_lower = response.to_lowercase();
    let mut issues = Vec::new();

    // Absolute language without hedging
    if OVERCONFIDENCE_PHRASES
        .iter()
        .any(|phrase| response_lower.contains(phrase))
    {
        issues.push(Issue {
            kind: IssueKind::Overconfidence,
            description: "Response uses absolute language without hedging uncertainty".to_string(),
            severity: Severity::Medium,
        });
    }

    // Specific numbers with no sourcing context
    let stats_count = stats_regex().find_iter(response).count();
    if stats_count > STATS_ALERT_THRESHOLD {
        issues.push(Issue {
            kind: IssueKind::PotentialHallucination,
            description: format!(
                "Response contains {stats_count} specific statistics that may need verification"
            ),
            severity: Severity::High,
        });
    }

    // Length check
    let word_count = response.split_whitespace().count();
    if word_count > VERBOSE_WORD_LIMIT {
        issues.push(Issue {
            kind: IssueKind::OverElaboration,
            description: format!("Response is {word_count} words, potentially too verbose"),
            severity: Severity::Low,
        });
    }

    // No hedging at all
    if !HEDGING_PHRASES
        .iter()
        .any(|phrase| response_lower.contains(phrase))
    {
        issues.push(Issue {
            kind: IssueKind::MissingUncertaintyLanguage,
            description: "Response lacks hedging language for uncertain claims".to_string(),
            severity: Severity::Medium,
        });
    }

    FailureReport::from_issues(issues)
}

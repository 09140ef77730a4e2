use indexmap::IndexMap;
use promptlab_eval::Evaluation;

/// One variant's metrics normalized to a common 0-1 scale, so the four
/// dimensions can be compared side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricProfile {
    pub variant: String,
    /// Accuracy grade over its 0-2 range.
    pub accuracy: f64,
    /// Completeness over its 0-100 range.
    pub completeness: f64,
    /// Inverse token share: the longest response scores 0, shorter ones
    /// approach 1. Falls back to 0.5 when every response has 0 tokens.
    pub efficiency: f64,
    /// Inverse issue share: 1 minus issues over (max issues + 1), so a
    /// clean response scores 1 even when others have issues.
    pub safety: f64,
}

/// Normalize every variant's summary onto the 0-1 scale.
pub fn metric_profiles(evaluations: &IndexMap<String, Evaluation>) -> Vec<MetricProfile> {
    let max_tokens = evaluations
        .values()
        .map(|e| e.summary.token_count.unwrap_or(0))
        .max()
        .unwrap_or(0);
    let max_issues = evaluations
        .values()
        .map(|e| e.summary.issue_count.unwrap_or(0))
        .max()
        .unwrap_or(0);

    evaluations
        .iter()
        .map(|(variant, evaluation)| {
            let summary = &evaluation.summary;
            let accuracy = summary.accuracy_score.unwrap_or(0) as f64 / 2.0;
            let completeness = summary.completeness_pct.unwrap_or(0.0) / 100.0;
            let efficiency = if max_tokens > 0 {
                1.0 - summary.token_count.unwrap_or(0) as f64 / max_tokens as f64
            } else {
                0.5
            };
            let safety =
                1.0 - summary.issue_count.unwrap_or(0) as f64 / (max_issues + 1) as f64;

            MetricProfile {
                variant: variant.clone(),
                accuracy,
                completeness,
                efficiency,
                safety,
            }
        })
        .collect()
}

/// Render profiles as an aligned table with one row per variant.
pub fn profile_table(profiles: &[MetricProfile]) -> String {
    let name_width = profiles
        .iter()
        .map(|p| p.variant.len())
        .max()
        .unwrap_or(0)
        .max("Variant".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:>8}  {:>12}  {:>10}  {:>6}\n",
        "Variant", "Accuracy", "Completeness", "Efficiency", "Safety"
    ));
    for profile in profiles {
        out.push_str(&format!(
            "{:<name_width$}  {:>8.2}  {:>12.2}  {:>10.2}  {:>6.2}\n",
            profile.variant, profile.accuracy, profile.completeness, profile.efficiency,
            profile.safety
        ));
    }
    out
}

use indexmap::IndexMap;
use promptlab_eval::Evaluation;

const BAR_WIDTH: usize = 40;

/// Horizontal bar chart of accuracy and completeness per variant.
pub fn score_bars(evaluations: &IndexMap<String, Evaluation>) -> String {
    let name_width = evaluations
        .keys()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max("Variant".len());

    let mut out = String::new();

    out.push_str("Accuracy (0-2)\n");
    for (variant, evaluation) in evaluations {
        let score = evaluation.summary.accuracy_score.unwrap_or(0);
        out.push_str(&bar_line(variant, name_width, score as f64 / 2.0, &score.to_string()));
    }

    out.push_str("\nCompleteness (%)\n");
    for (variant, evaluation) in evaluations {
        let pct = evaluation.summary.completeness_pct.unwrap_or(0.0);
        out.push_str(&bar_line(variant, name_width, pct / 100.0, &format!("{pct:.1}")));
    }

    out
}

/// Horizontal bars for the accuracy/length trade-off: token count per
/// variant (annotated with its accuracy score) and words per token.
/// Bars are scaled to the longest response, so the most verbose variant
/// fills the row.
pub fn efficiency_bars(evaluations: &IndexMap<String, Evaluation>) -> String {
    let name_width = evaluations
        .keys()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max("Variant".len());
    let max_tokens = evaluations
        .values()
        .map(|e| e.summary.token_count.unwrap_or(0))
        .max()
        .unwrap_or(0);
    let max_wpt = evaluations
        .values()
        .map(|e| e.token_efficiency.words_per_token)
        .fold(0.0f64, f64::max);

    let mut out = String::new();

    out.push_str("Token Count\n");
    for (variant, evaluation) in evaluations {
        let tokens = evaluation.summary.token_count.unwrap_or(0);
        let accuracy = evaluation.summary.accuracy_score.unwrap_or(0);
        let fraction = if max_tokens > 0 {
            tokens as f64 / max_tokens as f64
        } else {
            0.0
        };
        out.push_str(&bar_line(
            variant,
            name_width,
            fraction,
            &format!("{tokens} (accuracy {accuracy})"),
        ));
    }

    out.push_str("\nWords per Token\n");
    for (variant, evaluation) in evaluations {
        let wpt = evaluation.token_efficiency.words_per_token;
        let fraction = if max_wpt > 0.0 { wpt / max_wpt } else { 0.0 };
        out.push_str(&bar_line(variant, name_width, fraction, &format!("{wpt:.2}")));
    }

    out
}

fn bar_line(variant: &str, name_width: usize, fraction: f64, value: &str) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let bar = "#".repeat(filled);
    format!("{variant:<name_width$}  {bar:<bar_width$}  {value}\n", bar_width = BAR_WIDTH)
}

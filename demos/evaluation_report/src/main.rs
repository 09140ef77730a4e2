//! Offline walk-through of the evaluation and report layers: three canned
//! responses to the same inventory question, scored and compared without
//! any model calls.

use indexmap::IndexMap;

use promptlab::eval::{summary_rows, ResponseEvaluator};
use promptlab::report::{
    efficiency_bars, issue_matrix, metric_profiles, profile_table, score_bars, summary_table,
};

fn main() {
    let evaluator = ResponseEvaluator::new(
        vec![
            "reorder point".to_string(),
            "safety stock".to_string(),
            "lead time".to_string(),
        ],
        vec![
            "reorder point".to_string(),
            "lead time".to_string(),
            "demand forecasting".to_string(),
            "seasonal".to_string(),
        ],
    );

    // (variant, response, token count) — what three prompt styles might
    // plausibly come back with.
    let responses = [
        (
            "P1_direct",
            "Set the reorder point to average demand during lead time plus \
             safety stock. For Q4 you may want a larger buffer, depending on \
             how seasonal your demand is.",
            120,
        ),
        (
            "P2_constrained",
            "Reorder point = demand x lead time + safety stock. Review before \
             the seasonal peak.",
            60,
        ),
        (
            "P3_role_based",
            "This will definitely cut stockouts by 45% and save $2,300 per \
             month, guaranteed. Our analysis shows 78% of retailers see 30% \
             gains worth $1.2 million in year one. Always reorder early.",
            540,
        ),
    ];

    let mut evaluations = IndexMap::new();
    for (variant, response, token_count) in responses {
        evaluations.insert(
            variant.to_string(),
            evaluator.evaluate(response, token_count, None),
        );
    }

    println!("=== Summary ===");
    println!("{}", summary_table(&summary_rows(&evaluations)));

    println!("=== Scores ===");
    println!("{}", score_bars(&evaluations));

    println!("=== Token efficiency ===");
    println!("{}", efficiency_bars(&evaluations));

    println!("=== Issues ===");
    match issue_matrix(&evaluations) {
        Some(matrix) => println!("{}", matrix.render()),
        None => println!("No failure behaviors detected in any variant.\n"),
    }

    println!("=== Metric profiles (0-1) ===");
    println!("{}", profile_table(&metric_profiles(&evaluations)));
}

/// Whether any whitespace-delimited keyword of `item` occurs as a
/// substring of the (already lowercased) response.
///
/// Deliberately loose: no word boundaries, so "stock" also matches
/// "stockpile", and short keywords match aggressively. Kept this way on
/// purpose; smarter matching would change scores.
pub(crate) fn mentions_any_keyword(response_lower: &str, item: &str) -> bool {
    item.to_lowercase()
        .split_whitespace()
        .any(|keyword| response_lower.contains(keyword))
}

/// Classify each item as matched or missing against a response.
/// Every item lands in exactly one of the two lists, in input order.
pub(crate) fn split_matched(response: &str, items: &[String]) -> (Vec<String>, Vec<String>) {
    let response_lower = response.to_lowercase();
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for item in items {
        if mentions_any_keyword(&response_lower, item) {
            matched.push(item.clone());
        } else {
            missing.push(item.clone());
        }
    }
    (matched, missing)
}

use promptlab_eval::SummaryRow;

const HEADERS: [&str; 6] = [
    "Variant",
    "Accuracy (0-2)",
    "Completeness (%)",
    "Token Count",
    "Issues Found",
    "Clarity (1-5)",
];

/// Sentinel for a summary value that was not recorded.
const NOT_APPLICABLE: &str = "N/A";
/// Sentinel for a clarity rating that has not been collected yet.
const TO_BE_DETERMINED: &str = "TBD";

/// Render summary rows as an aligned text table, one line per variant.
pub fn summary_table(rows: &[SummaryRow]) -> String {
    let cells: Vec<[String; 6]> = rows.iter().map(row_cells).collect();

    let mut widths: [usize; 6] = [0; 6];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(&format_line(&HEADERS.map(String::from), &widths));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in &cells {
        out.push_str(&format_line(row, &widths));
        out.push('\n');
    }
    out
}

fn row_cells(row: &SummaryRow) -> [String; 6] {
    [
        row.variant.clone(),
        row.accuracy_score
            .map(|s| s.to_string())
            .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
        row.completeness_pct
            .map(|p| format!("{p:.1}"))
            .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
        row.token_count
            .map(|t| t.to_string())
            .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
        row.issues_found
            .map(|n| n.to_string())
            .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
        row.clarity
            .map(|c| c.to_string())
            .unwrap_or_else(|| TO_BE_DETERMINED.to_string()),
    ]
}

fn format_line(cells: &[String; 6], widths: &[usize; 6]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

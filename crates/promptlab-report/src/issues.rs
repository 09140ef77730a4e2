use indexmap::IndexMap;
use promptlab_eval::Evaluation;

/// Which issue kinds fired for which variants.
///
/// Columns are the distinct issue labels seen anywhere, sorted; rows
/// follow the evaluation map's order.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueMatrix {
    pub kinds: Vec<String>,
    pub rows: Vec<IssueMatrixRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IssueMatrixRow {
    pub variant: String,
    pub flags: Vec<bool>,
}

/// Build the variant-by-issue matrix, or `None` when no variant has any
/// issues (nothing to show).
pub fn issue_matrix(evaluations: &IndexMap<String, Evaluation>) -> Option<IssueMatrix> {
    let mut kinds: Vec<String> = evaluations
        .values()
        .flat_map(|e| e.failure_behaviors.issues.iter())
        .map(|issue| issue.kind.label().to_string())
        .collect();
    kinds.sort();
    kinds.dedup();

    if kinds.is_empty() {
        return None;
    }

    let rows = evaluations
        .iter()
        .map(|(variant, evaluation)| {
            let present: Vec<&str> = evaluation
                .failure_behaviors
                .issues
                .iter()
                .map(|issue| issue.kind.label())
                .collect();
            IssueMatrixRow {
                variant: variant.clone(),
                flags: kinds.iter().map(|k| present.contains(&k.as_str())).collect(),
            }
        })
        .collect();

    Some(IssueMatrix { kinds, rows })
}

impl IssueMatrix {
    /// Render as a text grid: 1 where the issue fired, 0 where it did not.
    pub fn render(&self) -> String {
        let name_width = self
            .rows
            .iter()
            .map(|r| r.variant.len())
            .max()
            .unwrap_or(0)
            .max("Variant".len());

        let mut out = String::new();
        out.push_str(&format!("{:<name_width$}", "Variant"));
        for kind in &self.kinds {
            out.push_str(&format!("  {kind}"));
        }
        out.push('\n');

        for row in &self.rows {
            out.push_str(&format!("{:<name_width$}", row.variant));
            for (kind, flag) in self.kinds.iter().zip(&row.flags) {
                let mark = if *flag { "1" } else { "0" };
                out.push_str(&format!("  {mark:^width$}", width = kind.len()));
            }
            out.push('\n');
        }
        out
    }
}

use promptlab_config::EvaluationConfig;

/// The two criteria lists an experiment scores against: key concepts for
/// the accuracy scorer and checklist items for the completeness scorer.
///
/// Built once per evaluation session and read-only afterwards. Empty
/// lists are valid; they make the corresponding scorer report 0. Order
/// is preserved as supplied, and duplicates are not rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriteriaStore {
    accuracy_criteria: Vec<String>,
    completeness_checklist: Vec<String>,
}

impl CriteriaStore {
    pub fn new(accuracy_criteria: Vec<String>, completeness_checklist: Vec<String>) -> Self {
        Self {
            accuracy_criteria,
            completeness_checklist,
        }
    }

    pub fn from_config(config: &EvaluationConfig) -> Self {
        Self::new(
            config.accuracy_criteria.clone(),
            config.completeness_checklist.clone(),
        )
    }

    pub fn accuracy_criteria(&self) -> &[String] {
        &self.accuracy_criteria
    }

    pub fn completeness_checklist(&self) -> &[String] {
        &self.completeness_checklist
    }
}

//! Experiment configuration for the prompt lab.
//!
//! One YAML file describes a whole experiment: which model to call, the
//! prompt variants under comparison, the shared query and context, and the
//! evaluation criteria. [`ExperimentConfig::from_path`] loads it; every
//! section is optional so partial configs (e.g. evaluation-only) still
//! deserialize.

mod env;

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use promptlab_core::LabError;

pub use env::{api_key_from_env, load_env_file};

/// Top-level experiment configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    #[serde(default)]
    pub models: ModelsConfig,
    /// Prompt variants keyed by id, in file order.
    #[serde(default)]
    pub prompts: IndexMap<String, PromptVariantConfig>,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub evaluation: EvaluationConfig,
}

impl ExperimentConfig {
    /// Load a config from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LabError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| LabError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    /// Parse a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, LabError> {
        serde_yaml::from_str(yaml).map_err(|e| LabError::Config(format!("invalid config: {e}")))
    }
}

/// The `models` section. Holds the primary model; the lab runs every
/// variant against the same model so prompt wording is the only thing
/// that changes between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelsConfig {
    #[serde(default)]
    pub primary: ModelConfig,
}

/// A provider/model pair plus its generation parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parameters: ModelParameters,
}

/// Generation parameters passed through to the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

fn default_temperature() -> f64 {
    0.7
}

fn default_top_p() -> f64 {
    0.95
}

fn default_max_output_tokens() -> u32 {
    1024
}

/// One prompt variant: a template plus optional display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptVariantConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub template: String,
}

/// The `query` section: the base question and the business context that
/// get substituted into every variant's template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub context: String,
}

/// The `evaluation` section: criteria for the accuracy scorer and the
/// checklist for the completeness scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    #[serde(default)]
    pub accuracy_criteria: Vec<String>,
    #[serde(default)]
    pub completeness_checklist: Vec<String>,
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use promptlab_config::{ExperimentConfig, PromptVariantConfig, QueryConfig};
use promptlab_core::LabError;

use crate::PromptTemplate;

/// Preview text is cut to this many characters in overview tables.
const PREVIEW_CHARS: usize = 150;

/// Failures local to prompt building. Rendering itself never fails;
/// asking for a variant the config does not define is the only error.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("unknown variant: {0}")]
    UnknownVariant(String),
}

impl From<PromptError> for LabError {
    fn from(err: PromptError) -> Self {
        LabError::Prompt(err.to_string())
    }
}

/// Display metadata for a prompt variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A variant rendered against the experiment's query and context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltPrompt {
    pub id: String,
    pub name: String,
    pub description: String,
    pub prompt: String,
}

/// One row of the variant overview table, with the prompt truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPreview {
    pub variant_id: String,
    pub name: String,
    pub description: String,
    pub preview: String,
}

/// The prompt variants of one experiment, plus the query and context they
/// are rendered against.
///
/// Every variant shares the same `{query}` and `{context}` values, so the
/// rendered prompts differ only in wording and structure. Iteration order
/// follows the config file.
#[derive(Debug, Clone)]
pub struct PromptSet {
    variants: IndexMap<String, PromptVariantConfig>,
    query: QueryConfig,
}

impl PromptSet {
    pub fn new(variants: IndexMap<String, PromptVariantConfig>, query: QueryConfig) -> Self {
        Self { variants, query }
    }

    pub fn from_config(config: &ExperimentConfig) -> Self {
        Self::new(config.prompts.clone(), config.query.clone())
    }

    /// Ids of all variants, in config order.
    pub fn variant_ids(&self) -> Vec<&str> {
        self.variants.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Display metadata for a variant. The name falls back to the id and
    /// the description to an empty string, for unknown ids as well.
    pub fn variant_info(&self, id: &str) -> VariantInfo {
        let variant = self.variants.get(id);
        VariantInfo {
            id: id.to_string(),
            name: variant
                .and_then(|v| v.name.clone())
                .unwrap_or_else(|| id.to_string()),
            description: variant
                .and_then(|v| v.description.clone())
                .unwrap_or_default(),
        }
    }

    /// Render one variant's template against the query and context.
    ///
    /// `{query}` is replaced first, then `{context}`; the result is
    /// trimmed. Unknown variant ids are the only error.
    pub fn build(&self, id: &str) -> Result<String, PromptError> {
        let variant = self
            .variants
            .get(id)
            .ok_or_else(|| PromptError::UnknownVariant(id.to_string()))?;
        let rendered = PromptTemplate::new(&variant.template).render(&[
            ("query", self.query.base.as_str()),
            ("context", self.query.context.as_str()),
        ]);
        Ok(rendered.trim().to_string())
    }

    /// Render every variant, keyed by id in config order.
    pub fn build_all(&self) -> IndexMap<String, BuiltPrompt> {
        self.variants
            .keys()
            .map(|id| {
                let info = self.variant_info(id);
                // Ids come from the map itself, so build cannot fail.
                let prompt = self.build(id).unwrap_or_default();
                (
                    id.clone(),
                    BuiltPrompt {
                        id: info.id,
                        name: info.name,
                        description: info.description,
                        prompt,
                    },
                )
            })
            .collect()
    }

    /// Overview rows with prompts truncated to a short preview.
    pub fn preview_rows(&self) -> Vec<PromptPreview> {
        self.build_all()
            .into_iter()
            .map(|(id, built)| PromptPreview {
                variant_id: id,
                name: built.name,
                description: built.description,
                preview: truncate_preview(&built.prompt),
            })
            .collect()
    }
}

fn truncate_preview(prompt: &str) -> String {
    if prompt.chars().count() > PREVIEW_CHARS {
        let cut: String = prompt.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        prompt.to_string()
    }
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabError {
    #[error("config error: {0}")]
    Config(String),
    #[error("prompt error: {0}")]
    Prompt(String),
    #[error("model error: {0}")]
    Model(String),
    #[error("rate limit: {0}")]
    RateLimit(String),
    #[error("timeout: {0}")]
    Timeout(String),
    #[error("parsing error: {0}")]
    Parsing(String),
    #[error("validation error: {0}")]
    Validation(String),
}

/// One model generation: the response text plus the metadata the lab keeps
/// for scoring and comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub text: String,
    /// Tokens in the response, as reported by the provider. Approximate and
    /// provider-dependent; estimated from word count when the provider omits
    /// usage metadata.
    pub token_count: u32,
    pub latency_ms: f64,
    pub model: String,
    pub finish_reason: String,
}

/// Identifies which provider and model produced a generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub provider: String,
    pub model: String,
}

/// A single-prompt completion model.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Generation, LabError>;

    fn info(&self) -> ModelInfo;
}

impl std::fmt::Debug for dyn CompletionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionModel")
            .field("info", &self.info())
            .finish()
    }
}

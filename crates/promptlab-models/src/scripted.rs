use std::{collections::VecDeque, sync::Arc};

use async_trait::async_trait;
use promptlab_core::{CompletionModel, Generation, LabError, ModelInfo};
use tokio::sync::Mutex;

/// A model that replays canned generations, for tests and offline demos.
#[derive(Clone)]
pub struct ScriptedModel {
    responses: Arc<Mutex<VecDeque<Generation>>>,
}

impl ScriptedModel {
    pub fn new(responses: Vec<Generation>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
        }
    }

    /// Build a generation with estimated metadata from plain text.
    pub fn generation(text: impl Into<String>) -> Generation {
        let text = text.into();
        Generation {
            token_count: crate::estimate_tokens(&text),
            latency_ms: 0.0,
            model: "scripted".to_string(),
            finish_reason: "completed".to_string(),
            text,
        }
    }
}

#[async_trait]
impl CompletionModel for ScriptedModel {
    async fn generate(&self, _prompt: &str) -> Result<Generation, LabError> {
        let mut responses = self.responses.lock().await;
        responses
            .pop_front()
            .ok_or_else(|| LabError::Model("scripted model exhausted responses".to_string()))
    }

    fn info(&self) -> ModelInfo {
        ModelInfo {
            provider: "scripted".to_string(),
            model: "scripted".to_string(),
        }
    }
}

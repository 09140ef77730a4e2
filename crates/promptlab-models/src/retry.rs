use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use promptlab_core::{CompletionModel, Generation, LabError, ModelInfo};

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

/// Wraps a model with exponential backoff on rate limits and timeouts.
pub struct RetryModel {
    inner: Arc<dyn CompletionModel>,
    policy: RetryPolicy,
}

impl RetryModel {
    pub fn new(inner: Arc<dyn CompletionModel>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

fn is_retryable(err: &LabError) -> bool {
    matches!(err, LabError::RateLimit(_) | LabError::Timeout(_))
}

#[async_trait]
impl CompletionModel for RetryModel {
    async fn generate(&self, prompt: &str) -> Result<Generation, LabError> {
        let mut last_error = None;
        for attempt in 0..self.policy.max_attempts {
            match self.inner.generate(prompt).await {
                Ok(generation) => return Ok(generation),
                Err(e) if is_retryable(&e) && attempt + 1 < self.policy.max_attempts => {
                    let delay = self.policy.base_delay * 2u32.saturating_pow(attempt as u32);
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }
        Err(last_error.unwrap_or_else(|| LabError::Model("retry exhausted".to_string())))
    }

    fn info(&self) -> ModelInfo {
        self.inner.info()
    }
}

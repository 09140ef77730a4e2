use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use promptlab_core::{CompletionModel, Generation, LabError, ModelInfo};
use serde_json::{json, Value};

use crate::backend::{ProviderBackend, ProviderRequest, ProviderResponse};

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f64,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            temperature: 0.7,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

/// Google Gemini adapter for single-prompt generation.
pub struct GeminiModel {
    config: GeminiConfig,
    backend: Arc<dyn ProviderBackend>,
}

impl GeminiModel {
    pub fn new(config: GeminiConfig, backend: Arc<dyn ProviderBackend>) -> Self {
        Self { config, backend }
    }

    fn build_request(&self, prompt: &str) -> ProviderRequest {
        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}],
            }],
            "generationConfig": {
                "temperature": self.config.temperature,
                "topP": self.config.top_p,
                "maxOutputTokens": self.config.max_output_tokens,
            },
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        );

        ProviderRequest {
            url,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body,
        }
    }
}

fn check_error_status(resp: &ProviderResponse) -> Result<(), LabError> {
    if resp.status == 429 {
        let msg = resp.body["error"]["message"]
            .as_str()
            .unwrap_or("rate limited")
            .to_string();
        return Err(LabError::RateLimit(msg));
    }
    if resp.status >= 400 {
        let msg = resp.body["error"]["message"]
            .as_str()
            .unwrap_or("unknown API error")
            .to_string();
        return Err(LabError::Model(format!(
            "Gemini API error ({}): {}",
            resp.status, msg
        )));
    }
    Ok(())
}

fn parse_response(resp: &ProviderResponse, model: &str, latency_ms: f64) -> Result<Generation, LabError> {
    check_error_status(resp)?;

    let candidate = &resp.body["candidates"][0];
    let parts = candidate["content"]["parts"]
        .as_array()
        .cloned()
        .unwrap_or_default();

    let mut text = String::new();
    for part in &parts {
        if let Some(t) = part["text"].as_str() {
            text.push_str(t);
        }
    }

    let finish_reason = candidate["finishReason"]
        .as_str()
        .unwrap_or("completed")
        .to_string();

    let token_count = match resp.body["usageMetadata"]["candidatesTokenCount"].as_u64() {
        Some(count) => count as u32,
        None => estimate_tokens(&text),
    };

    Ok(Generation {
        text,
        token_count,
        latency_ms: round2(latency_ms),
        model: model.to_string(),
        finish_reason,
    })
}

/// Rough token estimate for responses without usage metadata: word
/// count times 1.3, truncated.
pub fn estimate_tokens(text: &str) -> u32 {
    (text.split_whitespace().count() as f64 * 1.3) as u32
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[async_trait]
impl CompletionModel for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<Generation, LabError> {
        let request = self.build_request(prompt);
        let start = Instant::now();
        let resp = self.backend.send(request).await?;
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        parse_response(&resp, &self.config.model, latency_ms)
    }

    fn info(&self) -> ModelInfo {
        ModelInfo {
            provider: "google".to_string(),
            model: self.config.model.clone(),
        }
    }
}

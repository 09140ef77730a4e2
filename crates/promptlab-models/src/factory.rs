use std::sync::Arc;

use promptlab_config::ModelConfig;
use promptlab_core::{CompletionModel, LabError};

use crate::backend::ProviderBackend;
use crate::gemini::{GeminiConfig, GeminiModel};

/// Build a model from its config section. Only the `google` provider is
/// wired up; anything else is a config error.
pub fn model_from_config(
    config: &ModelConfig,
    api_key: &str,
    backend: Arc<dyn ProviderBackend>,
) -> Result<Arc<dyn CompletionModel>, LabError> {
    match config.provider.as_str() {
        "google" => {
            let gemini = GeminiConfig::new(api_key, &config.name)
                .with_temperature(config.parameters.temperature)
                .with_top_p(config.parameters.top_p)
                .with_max_output_tokens(config.parameters.max_output_tokens);
            Ok(Arc::new(GeminiModel::new(gemini, backend)))
        }
        other => Err(LabError::Config(format!("unsupported provider: {other}"))),
    }
}

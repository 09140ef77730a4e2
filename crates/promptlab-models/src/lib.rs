mod scripted;
pub use scripted::ScriptedModel;

mod backend;
pub use backend::{FakeBackend, HttpBackend, ProviderBackend, ProviderRequest, ProviderResponse};

mod gemini;
pub use gemini::{estimate_tokens, GeminiConfig, GeminiModel};

mod factory;
pub use factory::model_from_config;

mod retry;
pub use retry::{RetryModel, RetryPolicy};

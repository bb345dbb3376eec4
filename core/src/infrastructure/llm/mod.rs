pub mod offline_client;
pub mod openai_client;

pub use offline_client::OfflineLLMClient;
pub use openai_client::OpenAILLMClient;

use tracing::warn;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    menu_item::{
        entities::{LlmError, ModelVersion},
        ports::LLMClient,
        value_objects::ChatPrompt,
    },
};

/// Model provider selected at startup.
#[derive(Debug, Clone)]
pub enum LLMBackend {
    OpenAI(OpenAILLMClient),
    Offline(OfflineLLMClient),
}

impl LLMBackend {
    /// Uses OpenAI when an API key is configured, canned replies otherwise.
    pub fn from_config(config: &LLMConfig) -> Result<Self, CoreError> {
        match config.openai_api_key.as_deref().map(str::trim) {
            Some(api_key) if !api_key.is_empty() => Ok(LLMBackend::OpenAI(
                OpenAILLMClient::new(api_key.to_string(), config)?,
            )),
            _ => {
                warn!("OpenAI API key not found, using mock responses");
                Ok(LLMBackend::Offline(OfflineLLMClient::new()))
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, LLMBackend::OpenAI(_))
    }
}

impl LLMClient for LLMBackend {
    async fn generate(&self, prompt: ChatPrompt, model: ModelVersion) -> Result<String, LlmError> {
        match self {
            LLMBackend::OpenAI(client) => client.generate(prompt, model).await,
            LLMBackend::Offline(client) => client.generate(prompt, model).await,
        }
    }

    fn model_label(&self, model: ModelVersion) -> String {
        match self {
            LLMBackend::OpenAI(client) => client.model_label(model),
            LLMBackend::Offline(client) => client.model_label(model),
        }
    }
}

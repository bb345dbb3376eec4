use serde_json::json;

use crate::domain::menu_item::{
    entities::{LlmError, ModelVersion},
    ports::LLMClient,
    value_objects::ChatPrompt,
};

pub const OFFLINE_DESCRIPTION: &str =
    "A delicious fusion of authentic Indian spices and premium cheese on crispy crust.";
pub const OFFLINE_UPSELL: &str = "Pair it with a refreshing Mango Lassi!";

/// Stand-in used when no API key is configured. Always answers with the same
/// well-formed reply.
#[derive(Debug, Clone, Default)]
pub struct OfflineLLMClient;

impl OfflineLLMClient {
    pub fn new() -> Self {
        Self
    }
}

impl LLMClient for OfflineLLMClient {
    async fn generate(&self, _prompt: ChatPrompt, _model: ModelVersion) -> Result<String, LlmError> {
        Ok(json!({
            "description": OFFLINE_DESCRIPTION,
            "upsell_suggestion": OFFLINE_UPSELL,
        })
        .to_string())
    }

    /// Always reports the default model, whatever was requested.
    fn model_label(&self, _model: ModelVersion) -> String {
        format!("mock-{}", ModelVersion::Fast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu_item::helpers::parse_model_reply;

    #[tokio::test]
    async fn test_offline_reply_is_well_formed() {
        let prompt = ChatPrompt {
            system: String::new(),
            user: String::new(),
        };
        let raw = OfflineLLMClient::new()
            .generate(prompt, ModelVersion::Fast)
            .await
            .unwrap();

        let reply = parse_model_reply(&raw).unwrap();
        assert_eq!(reply.description, OFFLINE_DESCRIPTION);
        assert_eq!(reply.upsell_suggestion, OFFLINE_UPSELL);
    }

    #[test]
    fn test_offline_label_is_prefixed() {
        assert_eq!(
            OfflineLLMClient::new().model_label(ModelVersion::Fast),
            "mock-gpt-3.5-turbo"
        );
    }

    #[test]
    fn test_offline_label_ignores_requested_model() {
        assert_eq!(
            OfflineLLMClient::new().model_label(ModelVersion::Creative),
            "mock-gpt-3.5-turbo"
        );
    }
}

use tracing::{error, info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    menu_item::{
        entities::{LlmError, MenuItemDetails, ModelVersion},
        helpers::{parse_model_reply, truncate_words, word_count},
        ports::{LLMClient, MenuItemService},
        prompt::build_prompt,
        value_objects::{ChatPrompt, GenerateItemDetailsInput, MAX_DESCRIPTION_WORDS},
    },
    rate_limit::ports::RateLimiter,
};

impl<LLM, RL> Service<LLM, RL>
where
    LLM: LLMClient,
    RL: RateLimiter,
{
    /// Calls the model, downgrading an unavailable `Creative` model to `Fast`
    /// and retrying a transient failure once. Returns the reply text and the
    /// model that produced it.
    async fn call_llm(
        &self,
        prompt: ChatPrompt,
        requested: ModelVersion,
    ) -> Result<(String, ModelVersion), CoreError> {
        let mut model = requested;
        let mut downgraded = false;
        let mut retried = false;

        loop {
            match self.llm_client.generate(prompt.clone(), model).await {
                Ok(text) => return Ok((text, model)),
                Err(LlmError::ModelNotFound(name))
                    if model == ModelVersion::Creative && !downgraded =>
                {
                    warn!(
                        "Model {} unavailable; retrying with {}",
                        name,
                        ModelVersion::Fast
                    );
                    model = ModelVersion::Fast;
                    downgraded = true;
                }
                Err(LlmError::EmptyCompletion) => {
                    warn!(model = %model, "model returned an empty completion");
                    return Err(CoreError::MalformedResponse(
                        LlmError::EmptyCompletion.to_string(),
                    ));
                }
                Err(err) if err.is_retryable() && !retried => {
                    let delay = self.retry_policy.delay();
                    warn!(error = %err, ?delay, "model call failed; backing off and retrying");
                    retried = true;
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    error!(error = %err, model = %model, "model call failed");
                    return Err(CoreError::UpstreamUnavailable(err.to_string()));
                }
            }
        }
    }
}

impl<LLM, RL> MenuItemService for Service<LLM, RL>
where
    LLM: LLMClient,
    RL: RateLimiter,
{
    async fn generate_item_details(
        &self,
        input: GenerateItemDetailsInput,
    ) -> Result<MenuItemDetails, CoreError> {
        info!(
            "Generating details for item: {} using {}",
            input.item_name, input.model_version
        );

        // 1. Render prompt
        let prompt = build_prompt(&input.item_name);

        // 2. Call LLM
        let (raw_response, model_used) = self.call_llm(prompt, input.model_version).await?;

        // 3. Parse reply
        let reply = parse_model_reply(&raw_response)?;

        // 4. Enforce the description ceiling
        let words = word_count(&reply.description);
        let description = if words > MAX_DESCRIPTION_WORDS {
            warn!("Description too long ({} words), truncating", words);
            truncate_words(&reply.description, MAX_DESCRIPTION_WORDS)
        } else {
            reply.description
        };

        Ok(MenuItemDetails::new(
            description,
            reply.upsell_suggestion,
            self.llm_client.model_label(model_used),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, sync::Mutex};

    use super::*;
    use crate::{
        domain::{
            common::{RateLimitConfig, services::RetryPolicy},
            menu_item::value_objects::ItemName,
        },
        infrastructure::rate_limit::FixedWindowRateLimiter,
    };

    /// Replays queued results and records the model of every call.
    struct ScriptedLLMClient {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
        calls: Mutex<Vec<ModelVersion>>,
    }

    impl ScriptedLLMClient {
        fn new(replies: Vec<Result<String, LlmError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<ModelVersion> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl LLMClient for ScriptedLLMClient {
        async fn generate(
            &self,
            _prompt: ChatPrompt,
            model: ModelVersion,
        ) -> Result<String, LlmError> {
            self.calls.lock().unwrap().push(model);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(LlmError::EmptyCompletion))
        }
    }

    fn service(
        replies: Vec<Result<String, LlmError>>,
    ) -> Service<ScriptedLLMClient, FixedWindowRateLimiter> {
        Service::new(
            ScriptedLLMClient::new(replies),
            FixedWindowRateLimiter::new(&RateLimitConfig::default()),
            RetryPolicy::from_backoff_ms(0),
            true,
        )
    }

    fn input(name: &str, model_version: ModelVersion) -> GenerateItemDetailsInput {
        GenerateItemDetailsInput {
            item_name: ItemName::parse(name).unwrap(),
            model_version,
        }
    }

    fn reply(description: &str, upsell: &str) -> Result<String, LlmError> {
        Ok(serde_json::json!({
            "description": description,
            "upsell_suggestion": upsell,
        })
        .to_string())
    }

    #[tokio::test]
    async fn test_well_formed_reply_round_trips() {
        let service = service(vec![reply(
            "Blistered crust, San Marzano tomatoes, torn basil.",
            "Pair it with garlic bread!",
        )]);

        let details = service
            .generate_item_details(input("Margherita Pizza", ModelVersion::Fast))
            .await
            .unwrap();

        assert_eq!(
            details,
            MenuItemDetails {
                description: "Blistered crust, San Marzano tomatoes, torn basil.".to_string(),
                upsell_suggestion: "Pair it with garlic bread!".to_string(),
                model_used: "gpt-3.5-turbo".to_string(),
                success: true,
            }
        );
    }

    #[tokio::test]
    async fn test_long_description_is_truncated_to_thirty_words() {
        let long = (1..=31).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");
        let service = service(vec![reply(&long, "Pair it with garlic bread!")]);

        let details = service
            .generate_item_details(input("Margherita Pizza", ModelVersion::Fast))
            .await
            .unwrap();

        assert_eq!(word_count(&details.description), 30);
        assert!(details.description.ends_with("word30"));
        assert_eq!(details.upsell_suggestion, "Pair it with garlic bread!");
    }

    #[tokio::test]
    async fn test_malformed_reply_is_typed_error() {
        let service = service(vec![Ok("I cannot answer in JSON today.".to_string())]);

        let result = service
            .generate_item_details(input("Tiramisu", ModelVersion::Fast))
            .await;

        assert!(matches!(result, Err(CoreError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_empty_completion_is_malformed_not_upstream() {
        let service = service(vec![Err(LlmError::EmptyCompletion)]);

        let result = service
            .generate_item_details(input("Tiramisu", ModelVersion::Fast))
            .await;

        assert!(matches!(result, Err(CoreError::MalformedResponse(_))));
        assert_eq!(service.llm_client.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_transient_failure_is_retried_once() {
        let service = service(vec![
            Err(LlmError::Timeout),
            reply("Silky custard.", "Pair it with espresso!"),
        ]);

        let details = service
            .generate_item_details(input("Creme Brulee", ModelVersion::Fast))
            .await
            .unwrap();

        assert_eq!(details.description, "Silky custard.");
        assert_eq!(service.llm_client.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_persistent_failure_is_upstream_unavailable() {
        let service = service(vec![
            Err(LlmError::RateLimited),
            Err(LlmError::RateLimited),
        ]);

        let result = service
            .generate_item_details(input("Pad Thai", ModelVersion::Fast))
            .await;

        assert!(matches!(result, Err(CoreError::UpstreamUnavailable(_))));
        assert_eq!(service.llm_client.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let service = service(vec![Err(LlmError::Status {
            status: 401,
            body: "invalid api key".to_string(),
        })]);

        let result = service
            .generate_item_details(input("Pad Thai", ModelVersion::Fast))
            .await;

        assert!(matches!(result, Err(CoreError::UpstreamUnavailable(_))));
        assert_eq!(service.llm_client.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_creative_model_falls_back_to_fast() {
        let service = service(vec![
            Err(LlmError::ModelNotFound("gpt-4".to_string())),
            reply("Charred leeks.", "Pair it with a dry cider!"),
        ]);

        let details = service
            .generate_item_details(input("Leek Tart", ModelVersion::Creative))
            .await
            .unwrap();

        assert_eq!(details.model_used, "gpt-3.5-turbo");
        assert_eq!(
            service.llm_client.calls(),
            vec![ModelVersion::Creative, ModelVersion::Fast]
        );
    }

    #[tokio::test]
    async fn test_missing_fast_model_is_not_downgraded() {
        let service = service(vec![Err(LlmError::ModelNotFound(
            "gpt-3.5-turbo".to_string(),
        ))]);

        let result = service
            .generate_item_details(input("Leek Tart", ModelVersion::Fast))
            .await;

        assert!(matches!(result, Err(CoreError::UpstreamUnavailable(_))));
        assert_eq!(service.llm_client.calls(), vec![ModelVersion::Fast]);
    }
}

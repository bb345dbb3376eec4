use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu_item::{
        entities::{LlmError, MenuItemDetails, ModelVersion},
        value_objects::{ChatPrompt, GenerateItemDetailsInput},
    },
};

/// LLM Client trait for calling the text generation API
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate(
        &self,
        prompt: ChatPrompt,
        model: ModelVersion,
    ) -> impl Future<Output = Result<String, LlmError>> + Send;

    /// Name reported back to the client as `model_used`.
    fn model_label(&self, model: ModelVersion) -> String {
        model.as_str().to_string()
    }
}

/// Service trait for menu item generation
#[cfg_attr(test, mockall::automock)]
pub trait MenuItemService: Send + Sync {
    fn generate_item_details(
        &self,
        input: GenerateItemDetailsInput,
    ) -> impl Future<Output = Result<MenuItemDetails, CoreError>> + Send;
}

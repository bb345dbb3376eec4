use crate::domain::{
    common::entities::app_errors::CoreError, menu_item::entities::ModelReply,
};

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Keeps the first `max_words` words, rejoined with single spaces.
/// Text within the limit is returned untouched.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    if word_count(text) <= max_words {
        return text.to_string();
    }

    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Removes a surrounding markdown code fence (```json ... ```), if any.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_suffix("```").unwrap_or(body);
    // drop the language tag on the opening fence line
    match body.split_once('\n') {
        Some((tag, rest)) if !tag.trim_start().starts_with('{') => rest.trim(),
        _ => body.trim(),
    }
}

/// Parses the model's text as the two-field JSON object.
pub fn parse_model_reply(raw: &str) -> Result<ModelReply, CoreError> {
    let value: serde_json::Value = serde_json::from_str(strip_code_fence(raw)).map_err(|e| {
        tracing::error!("Failed to parse AI response: {}", e);
        CoreError::MalformedResponse(format!("reply is not valid JSON: {}", e))
    })?;

    if !value.is_object() {
        return Err(CoreError::MalformedResponse(
            "Response is not a dictionary".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::error!("Missing required fields in AI response: {}", e);
        CoreError::MalformedResponse(format!("Missing required fields in response: {}", e))
    })
}

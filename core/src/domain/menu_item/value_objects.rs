use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::domain::{common::entities::app_errors::CoreError, menu_item::entities::ModelVersion};

pub const MIN_ITEM_NAME_CHARS: usize = 2;
pub const MAX_ITEM_NAME_CHARS: usize = 100;
pub const MAX_DESCRIPTION_WORDS: usize = 30;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>"']"#).expect("static pattern is valid"));

/// A trimmed, sanitized food item name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    /// Trims the input and strips `< > " '` before checking the length bounds.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation("Item name cannot be empty".to_string()));
        }

        let sanitized = UNSAFE_CHARS.replace_all(trimmed, "");
        let len = sanitized.chars().count();

        if len > MAX_ITEM_NAME_CHARS {
            return Err(CoreError::Validation(format!(
                "Item name too long (max {} characters)",
                MAX_ITEM_NAME_CHARS
            )));
        }

        if len < MIN_ITEM_NAME_CHARS {
            return Err(CoreError::Validation(format!(
                "Item name too short (min {} characters)",
                MIN_ITEM_NAME_CHARS
            )));
        }

        Ok(Self(sanitized.into_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct GenerateItemDetailsInput {
    pub item_name: ItemName,
    pub model_version: ModelVersion,
}

/// System and user messages sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

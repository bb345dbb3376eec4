use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu_item::entities::ModelVersion;

pub const FALLBACK_DESCRIPTION: &str =
    "A delicious dish prepared with fresh ingredients and authentic flavors.";
pub const FALLBACK_UPSELL: &str = "Pair it with a refreshing beverage!";

/// Normalized generation result returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItemDetails {
    #[schema(example = "Hand-stretched crust topped with San Marzano tomatoes, fresh mozzarella and basil.")]
    pub description: String,
    #[schema(example = "Pair it with garlic bread!")]
    pub upsell_suggestion: String,
    #[schema(example = "gpt-3.5-turbo")]
    pub model_used: String,
    pub success: bool,
}

/// The two-field object the model is instructed to answer with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelReply {
    pub description: String,
    pub upsell_suggestion: String,
}

impl MenuItemDetails {
    pub fn new(description: String, upsell_suggestion: String, model_used: String) -> Self {
        Self {
            description,
            upsell_suggestion,
            model_used,
            success: true,
        }
    }

    /// Canned payload served when the model reply cannot be parsed.
    pub fn fallback(model: ModelVersion) -> Self {
        Self {
            description: FALLBACK_DESCRIPTION.to_string(),
            upsell_suggestion: FALLBACK_UPSELL.to_string(),
            model_used: format!("{} (fallback)", model),
            success: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_marked_by_model_suffix_only() {
        let details = MenuItemDetails::fallback(ModelVersion::Creative);
        assert_eq!(details.description, FALLBACK_DESCRIPTION);
        assert_eq!(details.upsell_suggestion, FALLBACK_UPSELL);
        assert_eq!(details.model_used, "gpt-4 (fallback)");
        assert!(details.success);
    }
}

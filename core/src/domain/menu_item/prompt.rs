use crate::domain::menu_item::value_objects::{ChatPrompt, ItemName};

pub const SYSTEM_PROMPT: &str =
    "You are a professional restaurant menu copywriter. Respond only with valid JSON.";

const ITEM_PLACEHOLDER: &str = "{item_name}";

/// Copywriter instructions; `{item_name}` is replaced with the sanitized item name.
pub const MENU_GENERATION_TEMPLATE: &str = r#"
You are an expert restaurant menu copywriter and sales strategist. Your task is to create compelling menu descriptions and upsell suggestions.

For the given food item, provide:

1. A BRIEF, ATTRACTIVE DESCRIPTION (maximum 30 words):
   - Highlight key ingredients, flavors, and appeal
   - Use appetizing, descriptive language
   - Focus on what makes this dish special
   - Keep it concise and mouth-watering

2. ONE UPSELL SUGGESTION:
   - Suggest a complementary drink, side, or dessert
   - Make it sound irresistible and logical
   - Use persuasive but not pushy language
   - Format as "Pair it with [item]!" or similar

IMPORTANT RULES:
- Description must be exactly 30 words or less
- Use professional, appetizing language
- Avoid generic phrases like "delicious" or "tasty"
- Be specific about flavors, textures, and ingredients
- Make the upsell suggestion relevant and appealing

Food Item: {item_name}

Respond in this exact JSON format:
{
    "description": "Your 30-word description here",
    "upsell_suggestion": "Your upsell suggestion here"
}
"#;

/// Renders the chat prompt for an item. Same name, same prompt.
pub fn build_prompt(item_name: &ItemName) -> ChatPrompt {
    ChatPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user: MENU_GENERATION_TEMPLATE.replace(ITEM_PLACEHOLDER, item_name.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_item_name() {
        let name = ItemName::parse("Margherita Pizza").unwrap();
        let prompt = build_prompt(&name);
        assert!(prompt.user.contains("Food Item: Margherita Pizza"));
        assert!(!prompt.user.contains(ITEM_PLACEHOLDER));
        assert_eq!(prompt.system, SYSTEM_PROMPT);
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let name = ItemName::parse("Mango Lassi").unwrap();
        assert_eq!(build_prompt(&name), build_prompt(&name));
    }

    #[test]
    fn test_prompt_requests_both_fields() {
        let prompt = build_prompt(&ItemName::parse("Tiramisu").unwrap());
        assert!(prompt.user.contains("\"description\""));
        assert!(prompt.user.contains("\"upsell_suggestion\""));
    }
}

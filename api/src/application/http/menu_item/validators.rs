use menucraft_core::domain::menu_item::{entities::ModelVersion, value_objects::ItemName};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateItemDetailsRequest {
    #[schema(example = "Margherita Pizza")]
    #[validate(custom(function = "validate_item_name"))]
    pub item_name: String,

    /// Defaults to `gpt-3.5-turbo`
    #[serde(default)]
    pub model_version: Option<ModelVersion>,
}

fn validate_item_name(item_name: &str) -> Result<(), ValidationError> {
    ItemName::parse(item_name)
        .map(|_| ())
        .map_err(|e| ValidationError::new("item_name").with_message(e.to_string().into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(item_name: &str) -> GenerateItemDetailsRequest {
        GenerateItemDetailsRequest {
            item_name: item_name.to_string(),
            model_version: None,
        }
    }

    #[test]
    fn test_valid_name_passes() {
        assert!(request("Margherita Pizza").validate().is_ok());
    }

    #[test]
    fn test_blank_name_fails_with_message() {
        let errors = request("   ").validate().unwrap_err();
        let field_errors = errors.field_errors();
        let item_errors = field_errors.get("item_name").unwrap();
        assert_eq!(
            item_errors[0].message.as_deref(),
            Some("Item name cannot be empty")
        );
    }

    #[test]
    fn test_model_version_defaults_when_omitted() {
        let payload: GenerateItemDetailsRequest =
            serde_json::from_str(r#"{"item_name": "Tiramisu"}"#).unwrap();
        assert_eq!(payload.model_version, None);
        assert_eq!(payload.model_version.unwrap_or_default(), ModelVersion::Fast);
    }
}

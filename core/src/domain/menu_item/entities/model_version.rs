use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Model variant serving a request. The wire names are the upstream model ids.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum ModelVersion {
    #[default]
    #[serde(rename = "gpt-3.5-turbo", alias = "fast")]
    Fast,
    #[serde(rename = "gpt-4", alias = "creative")]
    Creative,
}

impl ModelVersion {
    pub const ALLOWED: [&'static str; 2] = ["gpt-3.5-turbo", "gpt-4"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVersion::Fast => "gpt-3.5-turbo",
            ModelVersion::Creative => "gpt-4",
        }
    }
}

impl fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelVersion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "gpt-3.5-turbo" | "fast" => Ok(ModelVersion::Fast),
            "gpt-4" | "creative" => Ok(ModelVersion::Creative),
            other => Err(CoreError::Validation(format!(
                "Model version must be one of: {:?}, got '{}'",
                Self::ALLOWED,
                other
            ))),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SERVICE_NAME: &str = "AI-Powered Menu Intelligence Widget API";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    #[schema(example = "AI-Powered Menu Intelligence Widget API")]
    pub message: String,
    #[schema(example = "healthy")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub status: String,
    /// False when running offline with canned replies.
    pub llm_configured: bool,
    #[schema(example = "enabled")]
    pub rate_limiting: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    pub checked_at: DateTime<Utc>,
}

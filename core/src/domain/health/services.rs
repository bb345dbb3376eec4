use chrono::Utc;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::{HealthStatus, SERVICE_NAME, ServiceInfo},
        ports::HealthCheckService,
    },
    menu_item::ports::LLMClient,
    rate_limit::ports::RateLimiter,
};

impl<LLM, RL> HealthCheckService for Service<LLM, RL>
where
    LLM: LLMClient,
    RL: RateLimiter,
{
    fn service_info(&self) -> ServiceInfo {
        ServiceInfo {
            message: SERVICE_NAME.to_string(),
            status: "healthy".to_string(),
        }
    }

    async fn health(&self) -> Result<HealthStatus, CoreError> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            llm_configured: self.llm_configured,
            rate_limiting: "enabled".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            checked_at: Utc::now(),
        })
    }
}

use crate::{
    domain::common::{
        MenucraftConfig,
        entities::app_errors::CoreError,
        services::{RetryPolicy, Service},
    },
    infrastructure::{llm::LLMBackend, rate_limit::FixedWindowRateLimiter},
};

pub type MenucraftService = Service<LLMBackend, FixedWindowRateLimiter>;

pub fn create_service(config: MenucraftConfig) -> Result<MenucraftService, CoreError> {
    let llm_client = LLMBackend::from_config(&config.llm)?;
    let llm_configured = llm_client.is_configured();
    let rate_limiter = FixedWindowRateLimiter::new(&config.rate_limit);

    Ok(Service::new(
        llm_client,
        rate_limiter,
        RetryPolicy::from_backoff_ms(config.llm.retry_backoff_ms),
        llm_configured,
    ))
}

use tracing::warn;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    menu_item::ports::LLMClient,
    rate_limit::{
        entities::RateLimitDecision,
        ports::{RateLimitService, RateLimiter},
    },
};

impl<LLM, RL> RateLimitService for Service<LLM, RL>
where
    LLM: LLMClient,
    RL: RateLimiter,
{
    fn check_rate_limit(&self, client_key: &str) -> Result<u32, CoreError> {
        match self.rate_limiter.check(client_key) {
            RateLimitDecision::Allowed { remaining } => Ok(remaining),
            RateLimitDecision::Limited { retry_after } => {
                warn!(client = client_key, ?retry_after, "rate limit exceeded");
                // round up so clients never retry inside the window
                let secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
                Err(CoreError::RateLimited {
                    retry_after_secs: secs.max(1),
                })
            }
        }
    }
}

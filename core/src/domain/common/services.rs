use std::{sync::Arc, time::Duration};

use rand::Rng;

use crate::domain::{menu_item::ports::LLMClient, rate_limit::ports::RateLimiter};

/// Backoff applied before the single retry of a failed model call.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub base_delay: Duration,
    pub max_jitter: Duration,
}

impl RetryPolicy {
    pub fn from_backoff_ms(backoff_ms: u64) -> Self {
        Self {
            base_delay: Duration::from_millis(backoff_ms),
            max_jitter: Duration::from_millis(backoff_ms / 2),
        }
    }

    pub fn delay(&self) -> Duration {
        let jitter_ms = self.max_jitter.as_millis() as u64;
        self.base_delay + Duration::from_millis(rand::thread_rng().gen_range(0..=jitter_ms))
    }
}

pub struct Service<LLM, RL>
where
    LLM: LLMClient,
    RL: RateLimiter,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) rate_limiter: Arc<RL>,
    pub(crate) retry_policy: RetryPolicy,
    pub(crate) llm_configured: bool,
}

impl<LLM, RL> Clone for Service<LLM, RL>
where
    LLM: LLMClient,
    RL: RateLimiter,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            rate_limiter: Arc::clone(&self.rate_limiter),
            retry_policy: self.retry_policy,
            llm_configured: self.llm_configured,
        }
    }
}

impl<LLM, RL> Service<LLM, RL>
where
    LLM: LLMClient,
    RL: RateLimiter,
{
    pub fn new(
        llm_client: LLM,
        rate_limiter: RL,
        retry_policy: RetryPolicy,
        llm_configured: bool,
    ) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            rate_limiter: Arc::new(rate_limiter),
            retry_policy,
            llm_configured,
        }
    }
}

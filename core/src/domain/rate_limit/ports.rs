use crate::domain::{
    common::entities::app_errors::CoreError, rate_limit::entities::RateLimitDecision,
};

/// Admission control keyed by client address
#[cfg_attr(test, mockall::automock)]
pub trait RateLimiter: Send + Sync {
    fn check(&self, client_key: &str) -> RateLimitDecision;
}

pub trait RateLimitService: Send + Sync {
    /// Records a request for `client_key`; returns the remaining budget of the
    /// current window or `CoreError::RateLimited`.
    fn check_rate_limit(&self, client_key: &str) -> Result<u32, CoreError>;
}

use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::domain::{
    common::RateLimitConfig,
    rate_limit::{entities::RateLimitDecision, ports::RateLimiter},
};

#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: Instant,
    count: u32,
}

/// Fixed-window counter per client. The map holds at most `max_clients`
/// entries; expired windows are evicted first, then the oldest one.
#[derive(Debug)]
pub struct FixedWindowRateLimiter {
    windows: DashMap<String, Window>,
    limit: u32,
    window: Duration,
    max_clients: usize,
}

impl FixedWindowRateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            windows: DashMap::new(),
            limit: config.requests_per_window,
            window: Duration::from_secs(config.window_secs),
            max_clients: config.max_clients.max(1),
        }
    }

    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }

    pub fn check_at(&self, client_key: &str, now: Instant) -> RateLimitDecision {
        if !self.windows.contains_key(client_key) && self.windows.len() >= self.max_clients {
            self.evict(now);
        }

        let mut entry = self
            .windows
            .entry(client_key.to_string())
            .or_insert(Window {
                started_at: now,
                count: 0,
            });

        let elapsed = now.saturating_duration_since(entry.started_at);
        if elapsed >= self.window {
            *entry = Window {
                started_at: now,
                count: 0,
            };
        }

        if entry.count >= self.limit {
            let elapsed = now.saturating_duration_since(entry.started_at);
            return RateLimitDecision::Limited {
                retry_after: self.window.saturating_sub(elapsed),
            };
        }

        entry.count += 1;
        RateLimitDecision::Allowed {
            remaining: self.limit - entry.count,
        }
    }

    fn evict(&self, now: Instant) {
        self.windows
            .retain(|_, w| now.saturating_duration_since(w.started_at) < self.window);

        if self.windows.len() < self.max_clients {
            return;
        }

        let oldest = self
            .windows
            .iter()
            .min_by_key(|entry| entry.value().started_at)
            .map(|entry| entry.key().clone());

        if let Some(key) = oldest {
            tracing::debug!(client = %key, "rate limiter full, evicting oldest window");
            self.windows.remove(&key);
        }
    }
}

impl RateLimiter for FixedWindowRateLimiter {
    fn check(&self, client_key: &str) -> RateLimitDecision {
        self.check_at(client_key, Instant::now())
    }
}

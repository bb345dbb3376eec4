pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct MenucraftConfig {
    pub llm: LLMConfig,
    pub rate_limit: RateLimitConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// When absent the service runs offline and serves canned replies.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub timeout_secs: u64,
    pub max_tokens: u32,
    pub temperature: f32,
    pub retry_backoff_ms: u64,
}

#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    pub requests_per_window: u32,
    pub window_secs: u64,
    pub max_clients: usize,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            timeout_secs: 30,
            max_tokens: 200,
            temperature: 0.7,
            retry_backoff_ms: 500,
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_window: 10,
            window_secs: 60,
            max_clients: 10_000,
        }
    }
}

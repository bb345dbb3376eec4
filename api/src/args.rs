use clap::{Args as ClapArgs, Parser};
use menucraft_core::domain::common::{LLMConfig, MenucraftConfig, RateLimitConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "menucraft", version, about = "Menu description and upsell generation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub rate_limit: RateLimitArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://127.0.0.1:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    /// Without a key the API serves canned replies
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,

    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub llm_timeout_secs: u64,

    #[arg(long, env = "LLM_MAX_TOKENS", default_value_t = 200)]
    pub llm_max_tokens: u32,

    #[arg(long, env = "LLM_TEMPERATURE", default_value_t = 0.7)]
    pub llm_temperature: f32,

    #[arg(long, env = "LLM_RETRY_BACKOFF_MS", default_value_t = 500)]
    pub llm_retry_backoff_ms: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RateLimitArgs {
    #[arg(long, env = "RATE_LIMIT_PER_MINUTE", default_value_t = 10)]
    pub rate_limit_per_minute: u32,

    #[arg(long, env = "RATE_LIMIT_MAX_CLIENTS", default_value_t = 10_000)]
    pub rate_limit_max_clients: usize,

    /// Key clients by the first `X-Forwarded-For` entry instead of the peer address
    #[arg(long, env = "TRUST_FORWARDED_FOR", default_value_t = false)]
    pub trust_forwarded_for: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl From<Args> for MenucraftConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                openai_api_key: args.llm.openai_api_key,
                openai_base_url: args.llm.openai_base_url,
                timeout_secs: args.llm.llm_timeout_secs,
                max_tokens: args.llm.llm_max_tokens,
                temperature: args.llm.llm_temperature,
                retry_backoff_ms: args.llm.llm_retry_backoff_ms,
            },
            rate_limit: RateLimitConfig {
                requests_per_window: args.rate_limit.rate_limit_per_minute,
                window_secs: 60,
                max_clients: args.rate_limit.rate_limit_max_clients,
            },
        }
    }
}

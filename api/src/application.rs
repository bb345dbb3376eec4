pub mod http;
pub mod logging;
pub mod rate_limit_middleware;

pub mod llm;
pub mod rate_limit;

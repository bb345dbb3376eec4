use thiserror::Error;

/// Failure reported by an `LLMClient` adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LlmError {
    #[error("request to the model provider failed: {0}")]
    Transport(String),

    #[error("request to the model provider timed out")]
    Timeout,

    #[error("model provider rate limit exceeded")]
    RateLimited,

    #[error("model '{0}' is not available")]
    ModelNotFound(String),

    #[error("model provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected payload from model provider: {0}")]
    InvalidPayload(String),

    #[error("model provider returned no completion")]
    EmptyCompletion,
}

impl LlmError {
    /// Whether a second attempt has a reasonable chance of succeeding.
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::Transport(_) | LlmError::Timeout | LlmError::RateLimited => true,
            LlmError::Status { status, .. } => *status >= 500,
            LlmError::ModelNotFound(_) | LlmError::InvalidPayload(_) | LlmError::EmptyCompletion => {
                false
            }
        }
    }
}

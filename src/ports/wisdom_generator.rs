//! Generative wisdom backend port.

use async_trait::async_trait;
use thiserror::Error;

/// Error from the generative backend.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// No API key is configured. Callers fall back to static responses
    /// without treating this as a failure.
    #[error("Generation backend is not configured")]
    NotConfigured,

    /// The backend did not answer within the deadline.
    #[error("Generation timed out")]
    Timeout,

    /// The backend rejected the request or returned a failure status.
    #[error("Generation failed: {message}")]
    Provider { message: String },

    /// The backend answered 2xx but the payload had no usable text.
    #[error("Unexpected response shape: {0}")]
    InvalidResponse(String),
}

impl GenerationError {
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// True when retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerationError::Timeout | GenerationError::Provider { .. })
    }
}

/// Produces free-text guidance from a prompt.
#[async_trait]
pub trait WisdomGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

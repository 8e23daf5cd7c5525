//! Text generation port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::recommendation::RecommendationPrompt;

/// Generation errors
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit or quota exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty response from the model")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for the external text-generation service
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate free-form text for a prompt.
    ///
    /// One call per request; implementations do not retry.
    async fn generate(&self, prompt: &RecommendationPrompt) -> Result<String, GenerationError>;
}

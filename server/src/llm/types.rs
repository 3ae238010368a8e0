//! Generator types — provider-neutral errors and the generation seam.

use async_trait::async_trait;
use canvas::slide::Slide;

/// Errors produced by generative-backend operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The HTTP request to the provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The provider response body could not be interpreted.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    /// Whether retrying the same call may succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            Self::ApiRequest(_) | Self::ApiResponse { status: 429 | 500..=599, .. }
        )
    }
}

/// Provider-neutral async seam for slide generation. Enables mocking in tests.
#[async_trait]
pub trait SlideGenerator: Send + Sync {
    /// Generate a fresh deck of slide fragments for `topic`.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails or the response does not
    /// contain a usable slide array.
    async fn generate(&self, topic: &str, count: u32, tone: &str) -> Result<Vec<Slide>, LlmError>;

    /// Rewrite one fragment according to a natural-language instruction.
    /// On error the caller keeps the prior fragment untouched.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails or yields no fragment.
    async fn edit(&self, html: &str, instruction: &str) -> Result<String, LlmError>;
}

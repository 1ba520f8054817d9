//! LLM module: Text generation capability
//!
//! The rest of the crate only depends on [`Generator`]; [`GeminiClient`]
//! is the production implementation.

mod gemini;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};

/// Errors that can occur while generating text
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response contained no text")]
    EmptyResponse,

    #[error("Generation timed out after {0:?}")]
    Timeout(std::time::Duration),
}

/// Something that turns a prompt into text
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a completion for `prompt`
    ///
    /// # Errors
    /// Returns an error if the backend fails or returns no text.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

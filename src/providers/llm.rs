//! LLM provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Trait for turning a fully assembled prompt into a completion
///
/// Implementations:
/// - `OllamaLlm`: local Ollama server (tinyllama, phi3, ...)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a complete textual response for the prompt. One prompt in,
    /// one completion out; no streaming.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// The model being used
    fn model(&self) -> &str;
}

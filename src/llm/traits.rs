//! TextGenerator trait definition
//!
//! The single operation this crate needs from a large language model:
//! turn a prompt into text.

use anyhow::Result;
use async_trait::async_trait;

/// Abstract interface for prompt-to-text generation.
///
/// Implementations must be thread-safe (`Send + Sync`) so they can be shared
/// via `Arc<dyn TextGenerator>`.
///
/// No structure is assumed about the returned text; callers validate it.
/// Retry and timeout policy, if any, belong to the implementation.
///
/// # Implementations
///
/// - [`HttpTextGenerator`](super::HttpTextGenerator): any OpenAI-compatible
///   `/chat/completions` endpoint (Gemini, OpenAI, Ollama, vLLM, ...)
/// - [`MockTextGenerator`](super::MockTextGenerator): scripted replies for tests
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` to the model and wait for its complete reply.
    ///
    /// # Errors
    ///
    /// Returns an error on network, authentication, quota or upstream
    /// failures.
    async fn execute_text(&self, prompt: &str) -> Result<String>;

    /// The name of the model behind this generator.
    fn model_name(&self) -> &str;
}

//! HTTP text generator implementation
//!
//! Implements `TextGenerator` against any OpenAI-compatible
//! `/chat/completions` endpoint.
//!
//! Supported providers:
//! - **Gemini** (default): `https://generativelanguage.googleapis.com/v1beta/openai/chat/completions`
//! - **OpenAI**: `https://api.openai.com/v1/chat/completions`
//! - **Ollama / vLLM / LiteLLM**: just set the URL
//!
//! Configuration via [`LlmConfig`] (YAML `llm:` section or the `LLM_*`
//! environment variables).

use super::traits::TextGenerator;
use crate::LlmConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP-based text generator using the OpenAI chat completions format.
///
/// Cheaply cloneable (shares the reqwest client internally).
#[derive(Clone)]
pub struct HttpTextGenerator {
    client: reqwest::Client,
    url: String,
    model: String,
    api_key: Option<String>,
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible error response
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl HttpTextGenerator {
    /// Build a generator from explicit configuration.
    ///
    /// The request timeout (`timeout_secs`) is enforced here, at the
    /// collaborator boundary; callers of the generator impose none.
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: config.url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            max_tokens: config.max_tokens,
        })
    }

    /// Build a generator from the `LLM_*` environment variables alone.
    ///
    /// Returns `Ok(None)` if `LLM_URL` is explicitly set to empty or "disabled".
    pub fn from_env() -> Result<Option<Self>> {
        let mut config = LlmConfig::default();
        config.apply_env();

        if config.is_disabled() {
            return Ok(None);
        }
        Self::new(&config).map(Some)
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn execute_text(&self, prompt: &str) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
        };

        let mut req = self.client.post(&self.url).json(&body);
        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }

        tracing::debug!(
            model = %self.model,
            prompt_bytes = prompt.len(),
            "Sending prompt to LLM"
        );

        let response = req
            .send()
            .await
            .with_context(|| format!("Failed to connect to LLM API at {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(err) = serde_json::from_str::<ErrorResponse>(&body) {
                if let Some(detail) = err.error {
                    anyhow::bail!("LLM API error ({}): {}", status.as_u16(), detail.message);
                }
            }
            anyhow::bail!("LLM API returned {}: {}", status.as_u16(), body);
        }

        let resp: ChatResponse = response
            .json()
            .await
            .context("Failed to parse LLM API response")?;

        resp.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .context("LLM API returned no completion text")
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_explicit_config() {
        let config = LlmConfig {
            url: "http://localhost:11434/v1/chat/completions".to_string(),
            model: "llama3.1".to_string(),
            api_key: Some("key-123".to_string()),
            timeout_secs: 10,
            max_tokens: Some(2048),
        };
        let generator = HttpTextGenerator::new(&config).unwrap();
        assert_eq!(generator.url, "http://localhost:11434/v1/chat/completions");
        assert_eq!(generator.model_name(), "llama3.1");
        assert_eq!(generator.api_key.as_deref(), Some("key-123"));
        assert_eq!(generator.max_tokens, Some(2048));
    }

    #[test]
    fn test_empty_api_key_is_ignored() {
        let config = LlmConfig {
            api_key: Some(String::new()),
            ..LlmConfig::default()
        };
        let generator = HttpTextGenerator::new(&config).unwrap();
        assert!(generator.api_key.is_none());
    }

    #[test]
    fn test_request_serialization() {
        let body = ChatRequest {
            model: "m",
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            max_tokens: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
        assert!(json.get("max_tokens").is_none());
    }
}

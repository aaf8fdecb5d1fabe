//! Study Notes
//!
//! Per-user study notes with LLM-backed flashcard generation:
//! - In-memory note store keyed by user and note name
//! - Prompt construction for a configurable study subject
//! - Multi-stage validation of untrusted LLM output into at most 25 cards
//! - Pluggable LLM backend (OpenAI-compatible HTTP, scripted mock)

pub mod error;
pub mod flashcards;
pub mod llm;
pub mod notes;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use error::{CardField, Error, MalformedReason, Result};
pub use flashcards::{Flashcard, FlashcardGenerator, FlashcardSet};
pub use notes::{Note, NoteStore, User};

use serde::Deserialize;
use std::path::Path;

/// Gemini's OpenAI-compatible chat completions endpoint
pub const DEFAULT_LLM_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.5-flash-lite";

// ============================================================================
// YAML config structs (deserialization targets)
// ============================================================================

/// Top-level YAML configuration file structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub llm: LlmConfig,
    pub flashcards: FlashcardsYamlConfig,
}

/// LLM endpoint configuration (`llm:` section)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Chat completions URL; empty or "disabled" turns the HTTP backend off
    pub url: String,
    pub model: String,
    /// Bearer token, if the endpoint needs one
    pub api_key: Option<String>,
    /// Per-request timeout enforced by the HTTP client
    pub timeout_secs: u64,
    /// Output token cap sent with each request
    pub max_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_LLM_URL.into(),
            model: DEFAULT_LLM_MODEL.into(),
            api_key: None,
            timeout_secs: 120,
            max_tokens: Some(8192),
        }
    }
}

impl LlmConfig {
    /// Override fields from `LLM_URL`, `LLM_MODEL`, `LLM_API_KEY`,
    /// `LLM_TIMEOUT_SECS` and `LLM_MAX_TOKENS` when set.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("LLM_URL") {
            self.url = url;
        }
        if let Ok(model) = std::env::var("LLM_MODEL") {
            self.model = model;
        }
        if let Ok(key) = std::env::var("LLM_API_KEY") {
            self.api_key = Some(key).filter(|k| !k.is_empty());
        }
        if let Some(secs) = std::env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.timeout_secs = secs;
        }
        if let Some(tokens) = std::env::var("LLM_MAX_TOKENS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.max_tokens = Some(tokens);
        }
    }

    /// True when the URL is empty or explicitly "disabled".
    pub fn is_disabled(&self) -> bool {
        self.url.is_empty() || self.url.eq_ignore_ascii_case("disabled")
    }
}

/// Flashcard generation section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlashcardsYamlConfig {
    pub subject: String,
}

impl Default for FlashcardsYamlConfig {
    fn default() -> Self {
        Self {
            subject: flashcards::DEFAULT_SUBJECT.into(),
        }
    }
}

// ============================================================================
// Runtime config (what the application actually uses)
// ============================================================================

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub subject: String,
}

impl Config {
    /// Load configuration from an optional YAML file, then override with env vars.
    ///
    /// Priority: env var > YAML > default
    ///
    /// If `yaml_path` is None, tries "config.yaml" in CWD. If the file doesn't
    /// exist, falls back to pure env var / defaults.
    pub fn from_yaml_and_env(yaml_path: Option<&Path>) -> anyhow::Result<Self> {
        let yaml = Self::load_yaml(yaml_path);

        let mut llm = yaml.llm;
        llm.apply_env();

        Ok(Self {
            llm,
            subject: std::env::var("FLASHCARD_SUBJECT")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(yaml.flashcards.subject),
        })
    }

    /// Try to load and parse a YAML config file. Returns defaults on any failure.
    fn load_yaml(yaml_path: Option<&Path>) -> YamlConfig {
        let default_path = Path::new("config.yaml");
        let path = yaml_path.unwrap_or(default_path);

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    YamlConfig::default()
                }
            },
            Err(_) => {
                tracing::debug!(
                    "No config file at {}, using env vars / defaults",
                    path.display()
                );
                YamlConfig::default()
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod config_tests {
    use super::*;
    use crate::llm::{HttpTextGenerator, TextGenerator};
    use std::io::Write;

    const ENV_VARS: &[&str] = &[
        "LLM_URL",
        "LLM_MODEL",
        "LLM_API_KEY",
        "LLM_TIMEOUT_SECS",
        "LLM_MAX_TOKENS",
        "FLASHCARD_SUBJECT",
    ];

    #[test]
    fn test_yaml_config_loading() {
        let yaml = r#"
llm:
  url: http://localhost:11434/v1/chat/completions
  model: llama3.1
  api_key: local-key
  timeout_secs: 30
  max_tokens: 4096

flashcards:
  subject: organic chemistry
"#;

        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.llm.url, "http://localhost:11434/v1/chat/completions");
        assert_eq!(config.llm.model, "llama3.1");
        assert_eq!(config.llm.api_key.as_deref(), Some("local-key"));
        assert_eq!(config.llm.timeout_secs, 30);
        assert_eq!(config.llm.max_tokens, Some(4096));
        assert_eq!(config.flashcards.subject, "organic chemistry");
    }

    #[test]
    fn test_yaml_defaults() {
        let config = YamlConfig::default();
        assert_eq!(config.llm.url, DEFAULT_LLM_URL);
        assert_eq!(config.llm.model, DEFAULT_LLM_MODEL);
        assert!(config.llm.api_key.is_none());
        assert_eq!(config.llm.timeout_secs, 120);
        assert_eq!(config.flashcards.subject, "Torah study");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
llm:
  model: gpt-4o-mini
"#;
        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.url, DEFAULT_LLM_URL);
        assert_eq!(config.flashcards.subject, "Torah study");
    }

    #[test]
    fn test_disabled_url() {
        for url in ["", "disabled", "DISABLED"] {
            let config = LlmConfig {
                url: url.into(),
                ..LlmConfig::default()
            };
            assert!(config.is_disabled(), "url {:?}", url);
        }
        assert!(!LlmConfig::default().is_disabled());
    }

    /// Combined test for YAML file loading, env var overrides and the
    /// env-only HTTP generator constructor.
    /// Runs as a single test to avoid parallel env var race conditions.
    #[test]
    fn test_yaml_and_env_lifecycle() {
        fn clear_env() {
            for var in ENV_VARS {
                std::env::remove_var(var);
            }
        }

        // --- Phase 1: YAML values loaded correctly ---
        let yaml = r#"
llm:
  url: http://yaml-host/v1/chat/completions
  model: yaml-model
  api_key: yaml-key
flashcards:
  subject: yaml subject
"#;
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("config.yaml");
        let mut file = std::fs::File::create(&file_path).unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        clear_env();

        let config = Config::from_yaml_and_env(Some(&file_path)).unwrap();
        assert_eq!(config.llm.url, "http://yaml-host/v1/chat/completions");
        assert_eq!(config.llm.model, "yaml-model");
        assert_eq!(config.llm.api_key.as_deref(), Some("yaml-key"));
        assert_eq!(config.subject, "yaml subject");

        // --- Phase 2: Env vars override YAML ---
        std::env::set_var("LLM_MODEL", "env-model");
        std::env::set_var("LLM_TIMEOUT_SECS", "15");
        std::env::set_var("FLASHCARD_SUBJECT", "env subject");

        let config = Config::from_yaml_and_env(Some(&file_path)).unwrap();
        assert_eq!(config.llm.model, "env-model");
        assert_eq!(config.llm.timeout_secs, 15);
        assert_eq!(config.subject, "env subject");
        // YAML value still used where no env override
        assert_eq!(config.llm.url, "http://yaml-host/v1/chat/completions");

        // Unparsable numbers are ignored
        std::env::set_var("LLM_TIMEOUT_SECS", "soon");
        let config = Config::from_yaml_and_env(Some(&file_path)).unwrap();
        assert_eq!(config.llm.timeout_secs, 120);

        clear_env();

        // --- Phase 3: No YAML file → defaults ---
        let nonexistent = Path::new("/tmp/nonexistent-study-notes-config-12345.yaml");
        let config = Config::from_yaml_and_env(Some(nonexistent)).unwrap();
        assert_eq!(config.llm.url, DEFAULT_LLM_URL);
        assert_eq!(config.subject, "Torah study");

        // --- Phase 4: Env-only HTTP generator ---
        let generator = HttpTextGenerator::from_env().unwrap().unwrap();
        assert_eq!(generator.model_name(), DEFAULT_LLM_MODEL);

        std::env::set_var("LLM_MODEL", "gpt-4o-mini");
        let generator = HttpTextGenerator::from_env().unwrap().unwrap();
        assert_eq!(generator.model_name(), "gpt-4o-mini");

        std::env::set_var("LLM_URL", "disabled");
        assert!(HttpTextGenerator::from_env().unwrap().is_none());

        std::env::set_var("LLM_URL", "");
        assert!(HttpTextGenerator::from_env().unwrap().is_none());

        clear_env();
    }
}

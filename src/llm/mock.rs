//! Mock text generator for tests
//!
//! Replays a scripted sequence of replies and records every prompt, so tests
//! can drive the flashcard pipeline without a network.

use super::traits::TextGenerator;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text.
    Text(String),
    /// Fail with this message.
    Fail(String),
}

/// Scripted mock generator.
///
/// Replies are consumed in order; asking for more replies than were
/// scripted is an error.
///
/// # Example
///
/// ```rust
/// use study_notes::llm::{MockTextGenerator, TextGenerator};
///
/// # tokio_test::block_on(async {
/// let llm = MockTextGenerator::with_text(r#"{"cards": []}"#);
/// let reply = llm.execute_text("any prompt").await.unwrap();
/// assert_eq!(reply, r#"{"cards": []}"#);
/// assert_eq!(llm.prompts().await, vec!["any prompt".to_string()]);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct MockTextGenerator {
    replies: Mutex<VecDeque<MockReply>>,
    prompts: Mutex<Vec<String>>,
}

impl MockTextGenerator {
    pub fn new(replies: impl IntoIterator<Item = MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A generator that answers once with `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new([MockReply::Text(text.into())])
    }

    /// A generator whose single call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new([MockReply::Fail(message.into())])
    }

    /// Every prompt received so far, oldest first.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }

    /// Number of scripted replies not yet consumed.
    pub async fn remaining(&self) -> usize {
        self.replies.lock().await.len()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn execute_text(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().await.push(prompt.to_string());

        match self.replies.lock().await.pop_front() {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Fail(message)) => Err(anyhow::anyhow!(message)),
            None => anyhow::bail!("mock text generator has no scripted replies left"),
        }
    }

    fn model_name(&self) -> &str {
        "mock-scripted"
    }
}

//! Flashcard Generator - turns a stored note into a validated flashcard set
//!
//! Flow: ownership re-check → prompt → LLM call → parse/validate → project.

use super::models::FlashcardSet;
use super::parser::parse_flashcards;
use super::prompt::{build_flashcard_prompt, DEFAULT_SUBJECT};
use crate::error::{Error, Result};
use crate::llm::TextGenerator;
use crate::notes::{Note, NoteStore, User};

/// Converts notes held in a [`NoteStore`] into flashcards.
///
/// Borrows the store read-only; generation never mutates it.
pub struct FlashcardGenerator<'a> {
    store: &'a NoteStore,
    subject: String,
}

impl<'a> FlashcardGenerator<'a> {
    /// Create a generator over `store` using the default subject.
    pub fn new(store: &'a NoteStore) -> Self {
        Self {
            store,
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }

    /// Set the study domain named in the prompt (builder pattern).
    ///
    /// Notes unrelated to this subject are expected to yield zero cards.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Generate flashcards for `note` on behalf of `user`.
    ///
    /// `note` is only trusted for its name and content: the store must still
    /// hold a note with that name for `user`, otherwise the call fails before
    /// the LLM is contacted.
    ///
    /// # Errors
    ///
    /// - [`Error::NoteNotFound`] if the note is no longer in the store
    /// - [`Error::LlmInvocation`] with the collaborator's own error
    /// - [`Error::MalformedResponse`] if the reply fails validation
    pub async fn generate(
        &self,
        user: &User,
        note: &Note,
        llm: &dyn TextGenerator,
    ) -> Result<FlashcardSet> {
        if !self.store.contains(user.id, &note.name) {
            return Err(Error::NoteNotFound {
                user_id: user.id,
                name: note.name.clone(),
            });
        }

        let prompt = build_flashcard_prompt(&self.subject, &note.content);

        tracing::info!(
            user_id = user.id,
            note = %note.name,
            model = llm.model_name(),
            "Generating flashcards"
        );

        let response = llm
            .execute_text(&prompt)
            .await
            .map_err(Error::LlmInvocation)?;

        tracing::debug!(note = %note.name, response = %response, "LLM response text");

        let set = parse_flashcards(&response, user).map_err(|reason| {
            tracing::warn!(note = %note.name, %reason, "Rejected LLM response");
            Error::MalformedResponse(reason)
        })?;

        tracing::info!(
            user_id = user.id,
            note = %note.name,
            cards = set.len(),
            "Flashcards generated"
        );
        Ok(set)
    }
}

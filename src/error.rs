//! Error types shared by the note store and the flashcard generator
//!
//! Every error is terminal for the call that raised it: no partial flashcard
//! set is ever returned.

use thiserror::Error;

/// Result alias used across the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by note bookkeeping and flashcard generation.
#[derive(Debug, Error)]
pub enum Error {
    /// `add` with a name the user already uses.
    #[error("notes named '{name}' already exist for user {user_id}")]
    DuplicateName { user_id: u64, name: String },

    /// The user has no notes at all.
    #[error("no notes found for user {user_id}")]
    UserNotFound { user_id: u64 },

    /// The user has notes, but none with this name.
    #[error("no notes named '{name}' found for user {user_id}")]
    NoteNotFound { user_id: u64, name: String },

    /// The LLM collaborator failed (network, auth, quota, upstream timeout).
    #[error(transparent)]
    LlmInvocation(anyhow::Error),

    /// The collaborator answered, but its output failed validation.
    #[error("failed to parse LLM response: {0}")]
    MalformedResponse(#[from] MalformedReason),
}

/// Why a collaborator response was rejected.
///
/// Each validator in [`crate::flashcards::parser`] owns one or more variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("no JSON found in response")]
    NoJsonObject,

    #[error("response JSON does not parse: {0}")]
    InvalidJson(String),

    #[error("invalid JSON structure: missing cards array")]
    MissingCardsArray,

    #[error(
        "invalid card format at position {index}: id must be a number, question and answer must be strings"
    )]
    InvalidCardFormat { index: usize },

    #[error("too many cards generated: {count} exceeds limit of {limit}")]
    TooManyCards { count: usize, limit: usize },

    #[error("invalid card at position {index}: {field} must be non-empty")]
    EmptyField { index: usize, field: CardField },

    #[error("invalid card at position {index}: {field} exceeds maximum length of {max}")]
    FieldTooLong {
        index: usize,
        field: CardField,
        max: usize,
    },
}

/// Text field of a card, used in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Question,
    Answer,
}

impl std::fmt::Display for CardField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Question => write!(f, "question"),
            Self::Answer => write!(f, "answer"),
        }
    }
}

impl Error {
    /// The validation reason, if this is a malformed-response error.
    pub fn malformed_reason(&self) -> Option<&MalformedReason> {
        match self {
            Self::MalformedResponse(reason) => Some(reason),
            _ => None,
        }
    }
}

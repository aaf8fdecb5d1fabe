//! Flashcard models and limits

use crate::notes::User;
use serde::{Deserialize, Serialize};

/// Upper bound on cards per set. Keeps the generated JSON inside the
/// model's output-size limit regardless of note length.
pub const MAX_CARDS: usize = 25;

/// Upper bound, in characters, on a trimmed question or answer.
pub const MAX_FIELD_CHARS: usize = 2000;

/// Answer text the model is told to use when the notes leave a point open.
pub const AMBIGUOUS_ANSWER: &str = "Ambiguous / not stated";

/// A single question/answer pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// Cards generated from one note for one user.
///
/// Built fresh on every generation call and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashcardSet {
    pub user: User,
    pub cards: Vec<Flashcard>,
}

impl FlashcardSet {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

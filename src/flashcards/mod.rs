//! Flashcards module
//!
//! Converts a stored note into at most 25 question/answer cards by asking an
//! LLM and validating whatever comes back. The model's output is treated as
//! untrusted text: see [`parser`] for the validation stages.

pub mod generator;
pub mod models;
pub mod parser;
pub mod prompt;

pub use generator::FlashcardGenerator;
pub use models::*;
pub use parser::{extract_json_object, parse_flashcards};
pub use prompt::{build_flashcard_prompt, DEFAULT_SUBJECT};

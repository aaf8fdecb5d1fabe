//! LLM text generation module
//!
//! The flashcard generator only ever talks to a `TextGenerator`:
//! - `TextGenerator` trait: async prompt-to-text interface
//! - `HttpTextGenerator`: OpenAI-compatible chat completions client
//! - `MockTextGenerator`: scripted replies for tests

pub mod mock;
pub mod provider;
pub mod traits;

pub use mock::{MockReply, MockTextGenerator};
pub use provider::HttpTextGenerator;
pub use traits::TextGenerator;

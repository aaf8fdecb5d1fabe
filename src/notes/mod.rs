//! Study Notes module
//!
//! Keeps each user's free-text notes, addressed by (user id, note name).
//! Names are unique per user; content never changes after `add`.

pub mod models;
pub mod store;

pub use models::*;
pub use store::NoteStore;

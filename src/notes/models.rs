//! Study note models

use serde::{Deserialize, Serialize};

/// The owner of a set of notes.
///
/// Supplied by the caller; this crate never creates or mutates users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct User {
    pub id: u64,
    pub username: String,
}

impl User {
    pub fn new(id: u64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

/// A named block of free-text study notes.
///
/// Content is immutable once stored: there is no update operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub user: User,
    pub name: String,
    pub content: String,
}

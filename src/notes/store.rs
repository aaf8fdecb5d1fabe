//! In-memory note store keyed by user and note name.

use super::models::{Note, User};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Holds every user's notes, keyed by user id and then by note name.
///
/// Names are matched exactly (case-sensitive, untrimmed). A user "has no
/// notes" when there is no entry for their id; the entry is created on the
/// first `add` and dropped when the last note is removed.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: HashMap<u64, HashMap<String, Note>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new note for `user`.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateName`] if the user already has a note called `name`.
    /// The store is left untouched in that case.
    pub fn add(
        &mut self,
        user: &User,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();
        let user_notes = self.notes.entry(user.id).or_default();
        if user_notes.contains_key(&name) {
            return Err(Error::DuplicateName {
                user_id: user.id,
                name,
            });
        }

        tracing::debug!(user_id = user.id, note = %name, "Adding note");
        user_notes.insert(
            name.clone(),
            Note {
                user: user.clone(),
                name,
                content: content.into(),
            },
        );
        Ok(())
    }

    /// Delete the note called `name` and hand it back.
    ///
    /// # Errors
    ///
    /// [`Error::UserNotFound`] if the user has no notes,
    /// [`Error::NoteNotFound`] if none of them is called `name`.
    pub fn remove(&mut self, user: &User, name: &str) -> Result<Note> {
        let user_notes = self
            .notes
            .get_mut(&user.id)
            .ok_or(Error::UserNotFound { user_id: user.id })?;

        let note = user_notes.remove(name).ok_or_else(|| Error::NoteNotFound {
            user_id: user.id,
            name: name.to_string(),
        })?;

        if user_notes.is_empty() {
            self.notes.remove(&user.id);
        }

        tracing::debug!(user_id = user.id, note = %name, "Removed note");
        Ok(note)
    }

    /// Look up the note called `name`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`remove`](Self::remove).
    pub fn get(&self, user: &User, name: &str) -> Result<&Note> {
        self.notes
            .get(&user.id)
            .ok_or(Error::UserNotFound { user_id: user.id })?
            .get(name)
            .ok_or_else(|| Error::NoteNotFound {
                user_id: user.id,
                name: name.to_string(),
            })
    }

    /// Whether `user_id` currently owns a note called `name`.
    pub fn contains(&self, user_id: u64, name: &str) -> bool {
        self.notes
            .get(&user_id)
            .is_some_and(|user_notes| user_notes.contains_key(name))
    }

    /// Total number of notes across all users.
    pub fn len(&self) -> usize {
        self.notes.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

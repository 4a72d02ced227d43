//! Business logic helpers for the user's notes collection.

use std::cmp::Reverse;

use uuid::Uuid;

use crate::domain::Note;
use crate::storage::OrganizerStore;

use super::{ServiceError, ServiceResult};

/// Provides validated CRUD helpers over the notes collection.
pub struct NoteService;

impl NoteService {
    /// Creates a note and returns its identifier. Title and content are both
    /// required.
    pub fn add(
        store: &dyn OrganizerStore,
        user: &str,
        title: &str,
        content: &str,
    ) -> ServiceResult<Uuid> {
        let title = required(title, "Note title is required")?;
        let content = required(content, "Note content is required")?;
        Ok(store.add_note(user, Note::new(title, content))?)
    }

    /// Updates the note identified by `id` via the provided mutator.
    pub fn update<F>(store: &dyn OrganizerStore, user: &str, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Note),
    {
        let mut note = find_note(store, user, id)?;
        mutator(&mut note);
        note.id = id;
        required(&note.title, "Note title is required")?;
        required(&note.content, "Note content is required")?;
        note.touch();
        store.update_note(user, note)?;
        Ok(())
    }

    pub fn remove(store: &dyn OrganizerStore, user: &str, id: Uuid) -> ServiceResult<()> {
        store.delete_note(user, id)?;
        Ok(())
    }

    /// Returns the user's notes, most recently created first.
    pub fn list(store: &dyn OrganizerStore, user: &str) -> ServiceResult<Vec<Note>> {
        let mut notes = store.list_notes(user)?;
        notes.sort_by_key(|note| Reverse(note.created_at));
        Ok(notes)
    }
}

fn find_note(store: &dyn OrganizerStore, user: &str, id: Uuid) -> ServiceResult<Note> {
    store
        .list_notes(user)?
        .into_iter()
        .find(|note| note.id == id)
        .ok_or_else(|| ServiceError::Invalid("Note not found".into()))
}

fn required(value: &str, message: &str) -> Result<String, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Invalid(message.into()));
    }
    Ok(trimmed.to_string())
}

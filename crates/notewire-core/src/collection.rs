//! Note Collection - the authoritative client-side mirror
//!
//! This module maintains the in-memory set of notes the client knows the
//! server to hold. It is the single owner of note state on the client: the
//! view renderer only reads it, and the interaction controller is its only
//! writer.
//!
//! ## Storage Shape
//!
//! Lookup is a direct id → note map; a separate id vector preserves
//! insertion order for rendering. The two structures are kept consistent by
//! every mutation primitive, so lookup is O(1) and iteration is ordered and
//! reproducible.
//!
//! ## Mirror Discipline
//!
//! The collection lags the server but never diverges in the wrong direction:
//! notes appear only on creation acknowledgment, change only on update
//! acknowledgment or explicit edit, and leave only on delete acknowledgment.
//! A raced removal of an already-absent id is a signal, not an error.

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::{Note, NoteId, NotePatch};

/// Errors raised by collection mutation primitives
///
/// Both variants are defensive: under correct controller use the collection
/// never sees a duplicate insert, and `replace` misses only when an update
/// acknowledgment races a confirmed delete.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A note with this id is already held
    #[error("Duplicate note id: {0}")]
    DuplicateId(NoteId),

    /// No note with this id is held
    #[error("No note with id {0} in collection")]
    NotFound(NoteId),
}

/// Outcome of a removal attempt
///
/// `NotPresent` is deliberately not an error: two deletes for the same id may
/// race, and the second must resolve as a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The note was held and has been removed
    Removed(Note),
    /// No note with that id was held
    NotPresent,
}

impl Removal {
    /// Returns true if a note was actually removed
    pub fn was_removed(&self) -> bool {
        matches!(self, Removal::Removed(_))
    }
}

/// The authoritative in-memory set of known notes
#[derive(Debug, Clone, Default)]
pub struct NoteCollection {
    /// Direct id lookup
    notes: HashMap<NoteId, Note>,
    /// Insertion order, for rendering
    order: Vec<NoteId>,
}

impl NoteCollection {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a note
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateId`] if a note with the same id is
    /// already held. Ids are unique once assigned, so this occurring means a
    /// controller bug, not a data race.
    pub fn insert(&mut self, note: Note) -> Result<(), CollectionError> {
        let id = note.id();
        if self.notes.contains_key(&id) {
            return Err(CollectionError::DuplicateId(id));
        }
        self.order.push(id);
        self.notes.insert(id, note);
        Ok(())
    }

    /// Overwrites the mutable fields of the note with this id, in place
    ///
    /// Identity and render position are unchanged. Returns a copy of the
    /// updated note.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NotFound`] if no note with this id is held.
    pub fn replace(&mut self, id: NoteId, patch: &NotePatch) -> Result<Note, CollectionError> {
        let note = self
            .notes
            .get_mut(&id)
            .ok_or(CollectionError::NotFound(id))?;
        patch.apply_to(note);
        Ok(note.clone())
    }

    /// Removes the note with this id, if held
    ///
    /// Returns [`Removal::NotPresent`] rather than erroring when the id is
    /// absent, since a delete acknowledgment may race a concurrent removal.
    pub fn remove_by_id(&mut self, id: NoteId) -> Removal {
        match self.notes.remove(&id) {
            Some(note) => {
                self.order.retain(|held| *held != id);
                Removal::Removed(note)
            }
            None => Removal::NotPresent,
        }
    }

    /// Looks up a note by id
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    /// Returns true if a note with this id is held
    pub fn contains(&self, id: NoteId) -> bool {
        self.notes.contains_key(&id)
    }

    /// Iterates the held notes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.order.iter().filter_map(|id| self.notes.get(id))
    }

    /// The current ordered sequence of notes
    pub fn all(&self) -> Vec<&Note> {
        self.iter().collect()
    }

    /// Number of notes held
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no notes are held
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

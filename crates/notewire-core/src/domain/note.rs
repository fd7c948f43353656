//! Note domain entity
//!
//! This module defines the `Note` entity — the sole persisted entity in the
//! system — together with the two values that travel toward the server:
//! [`NoteDraft`] for a note that exists only en route to creation, and
//! [`NotePatch`] for a partial update.
//!
//! ## Lifecycle
//!
//! ```text
//!   NoteDraft ──create──► Note (id assigned by server, stable thereafter)
//!                           │
//!                  NotePatch│update
//!                           ▼
//!                         Note (same id, new body)
//!                           │
//!                           │ delete (acknowledged)
//!                           ▼
//!                        removed from the collection
//! ```
//!
//! There is deliberately no client-generated id: a pending note is a
//! `NoteDraft`, never a `Note`, so the collection can never hold an entry
//! whose identity the server does not know.

use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::newtypes::NoteId;

// ============================================================================
// Note entity
// ============================================================================

/// A persisted, server-acknowledged note
///
/// Fields are private: the id is set at construction and never mutated,
/// and body changes go through [`Note::set_body`] so every mutation site
/// is explicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Server-assigned identifier, stable for the note's lifetime
    id: NoteId,
    /// Free-form text content, no structural parsing
    body: String,
}

impl Note {
    /// Creates a note from a server acknowledgment
    pub fn new(id: NoteId, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }

    /// The server-assigned id
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// The note's text content
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Overwrites the body, identity unchanged
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }
}

// ============================================================================
// NoteDraft
// ============================================================================

/// A note that exists only as a value en route to the server
///
/// Construction validates presence of text — the single validation rule in
/// the system. A draft has no id; it becomes a [`Note`] only when the server
/// acknowledges creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDraft {
    body: String,
}

impl NoteDraft {
    /// Creates a draft, rejecting empty or whitespace-only text
    pub fn new(body: impl Into<String>) -> Result<Self, DomainError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(DomainError::EmptyBody);
        }
        Ok(Self { body })
    }

    /// The draft's text content
    pub fn body(&self) -> &str {
        &self.body
    }
}

// ============================================================================
// NotePatch
// ============================================================================

/// A partial update to an existing note
///
/// All fields are optional; [`NotePatch::is_empty`] lets callers refuse to
/// issue an update that would change nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePatch {
    /// Replacement body text, if the body is being changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl NotePatch {
    /// Creates an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns true if the patch carries no fields
    pub fn is_empty(&self) -> bool {
        self.body.is_none()
    }

    /// Applies the patch to a note in place
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(body) = &self.body {
            note.set_body(body.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_identity_is_stable() {
        let mut note = Note::new(NoteId::new(1), "first");
        note.set_body("second");
        assert_eq!(note.id(), NoteId::new(1));
        assert_eq!(note.body(), "second");
    }

    #[test]
    fn test_draft_rejects_empty_body() {
        assert_eq!(NoteDraft::new(""), Err(DomainError::EmptyBody));
        assert_eq!(NoteDraft::new("   \n\t"), Err(DomainError::EmptyBody));
    }

    #[test]
    fn test_draft_keeps_body_verbatim() {
        // Validation checks presence only; surrounding whitespace is preserved.
        let draft = NoteDraft::new("  buy milk  ").unwrap();
        assert_eq!(draft.body(), "  buy milk  ");
    }

    #[test]
    fn test_patch_apply() {
        let mut note = Note::new(NoteId::new(5), "old");
        NotePatch::new().with_body("new").apply_to(&mut note);
        assert_eq!(note.body(), "new");

        // An empty patch changes nothing
        NotePatch::new().apply_to(&mut note);
        assert_eq!(note.body(), "new");
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(NotePatch::new().is_empty());
        assert!(!NotePatch::new().with_body("x").is_empty());
    }

    #[test]
    fn test_patch_serializes_without_absent_fields() {
        let json = serde_json::to_string(&NotePatch::new().with_body("hi")).unwrap();
        assert_eq!(json, r#"{"body":"hi"}"#);
        let empty = serde_json::to_string(&NotePatch::new()).unwrap();
        assert_eq!(empty, "{}");
    }

    #[test]
    fn test_note_wire_shape() {
        let note: Note = serde_json::from_str(r#"{"id": 3, "body": "a"}"#).unwrap();
        assert_eq!(note.id(), NoteId::new(3));
        assert_eq!(note.body(), "a");
    }
}

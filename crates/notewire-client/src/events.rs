//! UI event contract
//!
//! The typed boundary between a front end (terminal commands here, a page
//! with forms and buttons elsewhere) and the interaction controller. Each
//! variant corresponds to one user-initiated action; item-scoped events
//! carry the note id the front end read off the rendered item's metadata.

use serde::{Deserialize, Serialize};

use notewire_core::domain::NoteId;

/// A user-initiated action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UiEvent {
    /// The new-note form was submitted with raw input text
    SubmitNew { body: String },
    /// An edit control was clicked on a rendered item
    EditRequested { id: NoteId },
    /// The edit form was submitted for a note
    SubmitEdit { id: NoteId, body: String },
    /// A delete control was clicked on a rendered item
    DeleteClicked { id: NoteId },
}

//! View Renderer - pure mapping from collection to display tree
//!
//! [`render`] turns the current state of a `NoteCollection` into a
//! [`ViewTree`]: an ordered list of items, each carrying its note's id as
//! addressable metadata so a UI event on an item can be resolved back to a
//! note without re-querying the server.
//!
//! The renderer performs no I/O and holds no state. It is idempotent:
//! rendering the same collection twice yields identical trees. Formatting a
//! tree for a terminal (or anything else) is the front end's concern.

use serde::{Deserialize, Serialize};

use notewire_core::collection::NoteCollection;
use notewire_core::domain::NoteId;

/// One rendered note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewItem {
    /// Addressable metadata: resolves a UI event back to its note
    pub id: NoteId,
    /// The note's text, verbatim
    pub body: String,
}

/// The rendered display tree
///
/// Items appear in the collection's insertion order. An empty tree renders
/// an empty list — the degraded state after a failed initial load looks the
/// same as a genuinely empty server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewTree {
    pub items: Vec<ViewItem>,
}

impl ViewTree {
    /// Number of rendered items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is rendered
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up a rendered item by its attached id
    pub fn item(&self, id: NoteId) -> Option<&ViewItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Renders the collection into a display tree
pub fn render(collection: &NoteCollection) -> ViewTree {
    ViewTree {
        items: collection
            .iter()
            .map(|note| ViewItem {
                id: note.id(),
                body: note.body().to_string(),
            })
            .collect(),
    }
}

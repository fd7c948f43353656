//! Interaction Controller
//!
//! The only component that sequences transport calls with Note Collection
//! mutations and view renders, and the only place latency, ordering, and
//! error-handling policy lives.
//!
//! ## Ordering Model
//!
//! Each user action is one async method: issue the transport call with no
//! lock held, then lock the state, apply the completion's single keyed
//! mutation, re-render, unlock. Completions therefore run to completion one
//! at a time, in whatever order the transport delivers them — which may not
//! match issuance order. Every mutation is keyed by note id and independent
//! of the others, so interleavings on different ids commute.
//!
//! There is no cancellation: a completion arriving after the UI has moved
//! on is still applied, and an update acknowledgment for a note whose
//! deletion was already confirmed is dropped rather than resurrecting it.
//!
//! ## Error Policy
//!
//! On any failure the collection keeps its last-known-good state, the view
//! is re-rendered unchanged, and a notice is pushed through the injected
//! sink. The typed error is also returned so programmatic callers (the CLI)
//! can map it to an exit code; `handle` consumes it entirely.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use notewire_core::collection::{CollectionError, NoteCollection, Removal};
use notewire_core::domain::{Note, NoteDraft, NoteId, NotePatch};
use notewire_core::ports::{INoteTransport, INoticeSink, Notice, TransportError};

use crate::events::UiEvent;
use crate::view::{render, ViewTree};

// ============================================================================
// EditForm / Handled
// ============================================================================

/// An edit form pre-filled with a note's current fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    /// The note being edited
    pub id: NoteId,
    /// Current body text, for pre-filling the input
    pub body: String,
}

/// Outcome of dispatching a single UI event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    /// The action completed or was recovered from; the view is current
    Done,
    /// An edit form to present to the user
    Edit(EditForm),
}

// ============================================================================
// Controller
// ============================================================================

/// Mutable client state: the mirror and its latest render
///
/// Kept behind one lock so a completion's mutation and re-render are a
/// single atomic step from every other completion's point of view.
struct ControllerState {
    collection: NoteCollection,
    view: ViewTree,
}

/// The interaction controller
///
/// Owns the Note Collection. Collaborators are injected at construction —
/// the controller reaches into no ambient globals.
pub struct Controller {
    transport: Arc<dyn INoteTransport>,
    notices: Arc<dyn INoticeSink>,
    state: Mutex<ControllerState>,
}

impl Controller {
    /// Creates a controller with an empty collection
    pub fn new(transport: Arc<dyn INoteTransport>, notices: Arc<dyn INoticeSink>) -> Self {
        Self {
            transport,
            notices,
            state: Mutex::new(ControllerState {
                collection: NoteCollection::new(),
                view: ViewTree::default(),
            }),
        }
    }

    /// A snapshot of the latest rendered view
    pub async fn view(&self) -> ViewTree {
        self.state.lock().await.view.clone()
    }

    /// A snapshot of the held notes, in insertion order
    pub async fn notes(&self) -> Vec<Note> {
        let state = self.state.lock().await;
        state.collection.iter().cloned().collect()
    }

    /// Loads the server's notes into the collection and renders once
    ///
    /// Meant to run once at startup. On failure the controller enters the
    /// degraded state: the (empty) collection is rendered and a notice is
    /// surfaced; no retry is scheduled — the user re-issues the action.
    ///
    /// Returns the number of notes loaded.
    pub async fn initial_load(&self) -> Result<usize, TransportError> {
        match self.transport.list().await {
            Ok(notes) => {
                let mut state = self.state.lock().await;
                for note in notes {
                    let id = note.id();
                    if let Err(CollectionError::DuplicateId(_)) = state.collection.insert(note) {
                        warn!(%id, "Server listed the same note id twice, keeping the first");
                    }
                }
                state.view = render(&state.collection);
                Ok(state.collection.len())
            }
            Err(err) => {
                {
                    let mut state = self.state.lock().await;
                    state.view = render(&state.collection);
                }
                self.surface(Notice::error("Could not load notes", err.to_string()))
                    .await;
                Err(err)
            }
        }
    }

    /// Creates a note from raw input text
    ///
    /// Empty or whitespace-only input is a silent no-op (the front end keeps
    /// the input as typed); nothing is sent. There is no optimistic insert:
    /// the collection only changes once the server has acknowledged the
    /// create and assigned an id.
    ///
    /// Returns the acknowledged note, or `None` for the empty-input no-op.
    pub async fn create(&self, raw_body: &str) -> Result<Option<Note>, TransportError> {
        let draft = match NoteDraft::new(raw_body) {
            Ok(draft) => draft,
            Err(_) => {
                debug!("Ignoring empty note submission");
                return Ok(None);
            }
        };

        match self.transport.create(&draft).await {
            Ok(note) => {
                let mut state = self.state.lock().await;
                if let Err(err) = state.collection.insert(note.clone()) {
                    // Server handed out a duplicate id; keep the mirror as-is.
                    warn!(error = %err, "Dropping create acknowledgment");
                }
                state.view = render(&state.collection);
                Ok(Some(note))
            }
            Err(err) => {
                self.rerender_unchanged().await;
                self.surface(Notice::error("Could not create note", err.to_string()))
                    .await;
                Err(err)
            }
        }
    }

    /// Resolves an edit click into a pre-filled form
    ///
    /// Returns `None` when the id no longer resolves — a click on an item
    /// the mirror has since dropped is ignored, not an error.
    pub async fn begin_edit(&self, id: NoteId) -> Option<EditForm> {
        let state = self.state.lock().await;
        match state.collection.get(id) {
            Some(note) => Some(EditForm {
                id,
                body: note.body().to_string(),
            }),
            None => {
                debug!(%id, "Edit requested for a note no longer held");
                None
            }
        }
    }

    /// Submits an edit form: updates the note on the server, then mirrors it
    ///
    /// Empty input is a silent no-op, matching `create`. On failure the
    /// caller keeps its form state and may resubmit.
    pub async fn submit_edit(&self, id: NoteId, new_body: &str) -> Result<(), TransportError> {
        if new_body.trim().is_empty() {
            debug!(%id, "Ignoring empty edit submission");
            return Ok(());
        }
        let patch = NotePatch::new().with_body(new_body);

        match self.transport.update(id, &patch).await {
            Ok(updated) => {
                let mut state = self.state.lock().await;
                match state.collection.replace(id, &patch) {
                    Ok(_) => {}
                    Err(CollectionError::NotFound(_)) => {
                        // The note's deletion was confirmed while this update
                        // was in flight. The mirror may lag the server, never
                        // diverge: do not resurrect it.
                        debug!(id = %updated.id(), "Dropping stale update acknowledgment");
                    }
                    Err(err) => warn!(error = %err, "Unexpected replace failure"),
                }
                state.view = render(&state.collection);
                Ok(())
            }
            Err(err) => {
                self.rerender_unchanged().await;
                self.surface(Notice::error("Could not update note", err.to_string()))
                    .await;
                Err(err)
            }
        }
    }

    /// Deletes a note and removes it from the mirror on acknowledgment
    ///
    /// Two deletes for the same id may race; the second acknowledgment finds
    /// the id already absent and resolves as a no-op. There is no optimistic
    /// removal: a failed delete leaves the item visible.
    pub async fn delete(&self, id: NoteId) -> Result<(), TransportError> {
        match self.transport.delete(id).await {
            Ok(ack) => {
                {
                    let mut state = self.state.lock().await;
                    if let Removal::NotPresent = state.collection.remove_by_id(ack.id) {
                        debug!(id = %ack.id, "Delete acknowledged for an already-removed note");
                    }
                    state.view = render(&state.collection);
                }
                if let Some(message) = ack.message {
                    self.surface(Notice::info("Note deleted", message)).await;
                }
                Ok(())
            }
            Err(err) => {
                self.rerender_unchanged().await;
                self.surface(Notice::error("Could not delete note", err.to_string()))
                    .await;
                Err(err)
            }
        }
    }

    /// Dispatches one UI event
    ///
    /// This is the front end's entrypoint: failures are fully absorbed here
    /// (state rolled back, notice surfaced) and never propagate further.
    pub async fn handle(&self, event: UiEvent) -> Handled {
        match event {
            UiEvent::SubmitNew { body } => {
                let _ = self.create(&body).await;
                Handled::Done
            }
            UiEvent::EditRequested { id } => match self.begin_edit(id).await {
                Some(form) => Handled::Edit(form),
                None => Handled::Done,
            },
            UiEvent::SubmitEdit { id, body } => {
                let _ = self.submit_edit(id, &body).await;
                Handled::Done
            }
            UiEvent::DeleteClicked { id } => {
                let _ = self.delete(id).await;
                Handled::Done
            }
        }
    }

    /// Re-renders the unchanged collection after a failed operation
    async fn rerender_unchanged(&self) {
        let mut state = self.state.lock().await;
        state.view = render(&state.collection);
    }

    /// Delivers a notice, logging (never failing) on delivery problems
    async fn surface(&self, notice: Notice) {
        if let Err(err) = self.notices.notify(&notice).await {
            warn!(error = %err, "Failed to deliver notice");
        }
    }
}

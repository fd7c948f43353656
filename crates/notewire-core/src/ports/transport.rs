//! Note transport port (driven/secondary port)
//!
//! This module defines the interface for the notes HTTP API. The shipped
//! implementation (`notewire-api`) speaks JSON over HTTP to a Notewire
//! server, but the trait is wire-agnostic: the synchronization core only
//! sees typed operations and typed failures.
//!
//! ## Design Notes
//!
//! - Failures are a typed enum rather than `anyhow::Error` because the
//!   interaction controller's recovery policy dispatches on the kind
//!   (a 404 on delete reads differently from an unreachable server).
//! - No operation retries: a single failed attempt surfaces immediately to
//!   the caller, which owns all recovery policy.
//! - The adapter holds no state between calls and performs no caching.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Note, NoteDraft, NoteId, NotePatch};

// ============================================================================
// TransportError
// ============================================================================

/// Typed failure surfaced by every transport operation
///
/// Mapping from the wire: 404-class responses become `NotFound`, 422-class
/// become `Validation`, and everything else — transport-level failures,
/// undecodable bodies, any other non-2xx status — becomes `Network`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Transport unreachable, or a non-2xx status with no specific mapping
    #[error("Network error: {0}")]
    Network(String),

    /// The server rejected the input (422-class)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The id is unknown to the server (404-class)
    #[error("Note {0} not found on server")]
    NotFound(NoteId),
}

// ============================================================================
// DeleteAck
// ============================================================================

/// Acknowledgment of a confirmed delete
///
/// The server echoes the removed note's id; `message` is informational and
/// optional. The wire layer accepts both the `id` and legacy `noteId`
/// spellings of the id field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    /// Id of the removed note
    #[serde(alias = "noteId")]
    pub id: NoteId,
    /// Optional human-readable confirmation from the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ============================================================================
// INoteTransport trait
// ============================================================================

/// Port trait for the notes API
///
/// Translates the four logical note operations (plus single-note fetch) into
/// requests against the server and parses responses into domain values or a
/// [`TransportError`].
///
/// ## Implementation Notes
///
/// - All operations are asynchronous and may suspend.
/// - Implementations must treat any non-2xx status as failure regardless of
///   body content.
/// - Implementations must never retry; the caller is the sole recovery point.
#[async_trait::async_trait]
pub trait INoteTransport: Send + Sync {
    /// Lists all notes known to the server
    ///
    /// No side effects.
    async fn list(&self) -> Result<Vec<Note>, TransportError>;

    /// Fetches a single note by id
    async fn fetch(&self, id: NoteId) -> Result<Note, TransportError>;

    /// Creates a note from a validated draft
    ///
    /// Side effect: one new persisted record. The returned note carries the
    /// server-assigned id.
    async fn create(&self, draft: &NoteDraft) -> Result<Note, TransportError>;

    /// Applies a partial update to the note with this id
    ///
    /// Side effect: one record mutated. Returns the updated note.
    async fn update(&self, id: NoteId, patch: &NotePatch) -> Result<Note, TransportError>;

    /// Deletes the note with this id
    ///
    /// Side effect: one record removed.
    async fn delete(&self, id: NoteId) -> Result<DeleteAck, TransportError>;
}

//! HttpNoteTransport - INoteTransport implementation over the notes API
//!
//! Wraps the [`ApiClient`] to fulfil the `INoteTransport` port contract.
//! The client owns wire details (URLs, JSON, status mapping); this adapter
//! is the seam the synchronization core is constructed against.

use notewire_core::domain::{Note, NoteDraft, NoteId, NotePatch};
use notewire_core::ports::{DeleteAck, INoteTransport, TransportError};

use crate::client::ApiClient;

/// `INoteTransport` implementation backed by the Notewire HTTP API
pub struct HttpNoteTransport {
    client: ApiClient,
}

impl HttpNoteTransport {
    /// Creates a transport against the given server base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: ApiClient::new(base_url),
        }
    }

    /// Wraps an existing [`ApiClient`]
    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying client
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait::async_trait]
impl INoteTransport for HttpNoteTransport {
    async fn list(&self) -> Result<Vec<Note>, TransportError> {
        self.client.list_notes().await
    }

    async fn fetch(&self, id: NoteId) -> Result<Note, TransportError> {
        self.client.get_note(id).await
    }

    async fn create(&self, draft: &NoteDraft) -> Result<Note, TransportError> {
        self.client.create_note(draft).await
    }

    async fn update(&self, id: NoteId, patch: &NotePatch) -> Result<Note, TransportError> {
        self.client.update_note(id, patch).await
    }

    async fn delete(&self, id: NoteId) -> Result<DeleteAck, TransportError> {
        self.client.delete_note(id).await
    }
}

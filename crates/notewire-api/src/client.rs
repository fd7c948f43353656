//! Notes API client
//!
//! Provides a typed HTTP client for the Notewire server's JSON API.
//! Handles endpoint construction, JSON deserialization, and mapping of
//! response statuses to typed transport failures.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use notewire_api::client::ApiClient;
//! use notewire_core::domain::NoteDraft;
//!
//! # async fn example() -> Result<(), notewire_core::ports::TransportError> {
//! let client = ApiClient::new("http://127.0.0.1:3000");
//! let note = client.create_note(&NoteDraft::new("remember the milk").unwrap()).await?;
//! println!("created note {}", note.id());
//! # Ok(())
//! # }
//! ```

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use tracing::debug;

use notewire_core::domain::{Note, NoteDraft, NoteId, NotePatch};
use notewire_core::ports::{DeleteAck, TransportError};

/// HTTP client for the notes API
///
/// Wraps `reqwest::Client` with base URL construction. The client is
/// stateless between calls: it performs no caching, holds no cursor, and
/// never retries — a single failed attempt surfaces immediately as a
/// [`TransportError`].
pub struct ApiClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL for API requests, without a trailing slash
    base_url: String,
}

impl ApiClient {
    /// Creates a new ApiClient against the given base URL
    ///
    /// # Arguments
    /// * `base_url` - Server root, e.g. `"http://127.0.0.1:3000"`
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Returns the base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates a request builder for the given method and path
    ///
    /// Automatically prepends the base URL.
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, PATCH, DELETE)
    /// * `path` - API path relative to base URL (e.g., "/notes" or "/notes/3")
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Lists all notes
    ///
    /// Makes `GET /notes` and decodes the JSON array.
    pub async fn list_notes(&self) -> Result<Vec<Note>, TransportError> {
        debug!("Fetching note list from /notes");

        let response = self
            .request(Method::GET, "/notes")
            .send()
            .await
            .map_err(request_error)?;
        let response = check_status(response, None).await?;

        let notes: Vec<Note> = decode_json(response).await?;
        debug!(count = notes.len(), "Fetched note list");
        Ok(notes)
    }

    /// Fetches a single note by id
    ///
    /// Makes `GET /notes/{id}`.
    pub async fn get_note(&self, id: NoteId) -> Result<Note, TransportError> {
        debug!(%id, "Fetching note");

        let response = self
            .request(Method::GET, &format!("/notes/{id}"))
            .send()
            .await
            .map_err(request_error)?;
        let response = check_status(response, Some(id)).await?;

        decode_json(response).await
    }

    /// Creates a note from a validated draft
    ///
    /// Makes `POST /notes` with a `{body}` JSON payload and decodes the
    /// acknowledged note, which carries the server-assigned id.
    pub async fn create_note(&self, draft: &NoteDraft) -> Result<Note, TransportError> {
        debug!("Creating note");

        let response = self
            .request(Method::POST, "/notes")
            .json(draft)
            .send()
            .await
            .map_err(request_error)?;
        let response = check_status(response, None).await?;

        let note: Note = decode_json(response).await?;
        debug!(id = %note.id(), "Note created");
        Ok(note)
    }

    /// Applies a partial update to the note with this id
    ///
    /// Makes `PATCH /notes/{id}` with the patch fields as JSON.
    pub async fn update_note(&self, id: NoteId, patch: &NotePatch) -> Result<Note, TransportError> {
        debug!(%id, "Updating note");

        let response = self
            .request(Method::PATCH, &format!("/notes/{id}"))
            .json(patch)
            .send()
            .await
            .map_err(request_error)?;
        let response = check_status(response, Some(id)).await?;

        decode_json(response).await
    }

    /// Deletes the note with this id
    ///
    /// Makes `DELETE /notes/{id}` and decodes the acknowledgment. A `204 No
    /// Content` reply is also accepted and synthesized into an ack.
    pub async fn delete_note(&self, id: NoteId) -> Result<DeleteAck, TransportError> {
        debug!(%id, "Deleting note");

        let response = self
            .request(Method::DELETE, &format!("/notes/{id}"))
            .send()
            .await
            .map_err(request_error)?;
        let response = check_status(response, Some(id)).await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(DeleteAck { id, message: None });
        }
        decode_json(response).await
    }
}

// ============================================================================
// Error mapping
// ============================================================================

/// Maps a transport-level failure (connect, DNS, timeout) to a typed error
fn request_error(err: reqwest::Error) -> TransportError {
    TransportError::Network(err.to_string())
}

/// Maps a non-2xx status to a typed error; passes 2xx responses through
///
/// `id` is the note id the request addressed, when it addressed one —
/// it makes the `NotFound` variant self-describing.
async fn check_status(response: Response, id: Option<NoteId>) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // Body text is best-effort detail; the status alone decides the kind.
    let detail = response.text().await.unwrap_or_default();

    match status {
        StatusCode::NOT_FOUND => match id {
            Some(id) => Err(TransportError::NotFound(id)),
            None => Err(TransportError::Network(format!(
                "unexpected 404 for collection endpoint: {detail}"
            ))),
        },
        StatusCode::UNPROCESSABLE_ENTITY => Err(TransportError::Validation(if detail.is_empty() {
            "server rejected input".to_string()
        } else {
            detail
        })),
        _ => Err(TransportError::Network(format!(
            "server returned {status}: {detail}"
        ))),
    }
}

/// Decodes a JSON response body, mapping decode failures to `Network`
async fn decode_json<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, TransportError> {
    response
        .json()
        .await
        .map_err(|e| TransportError::Network(format!("invalid response body: {e}")))
}

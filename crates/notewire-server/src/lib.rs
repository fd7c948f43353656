//! Notewire Server - note persistence and HTTP API
//!
//! SQLite-backed record store plus the JSON API the client's transport
//! adapter speaks to:
//!
//! | Method    | Path        | Success                          |
//! |-----------|-------------|----------------------------------|
//! | GET       | /notes      | 200, array of `{id, body}`       |
//! | GET       | /notes/:id  | 200, one note                    |
//! | POST      | /notes      | 201, note with assigned id       |
//! | PATCH/PUT | /notes/:id  | 200, updated note                |
//! | DELETE    | /notes/:id  | 200, `{id, message}` ack         |
//!
//! Unknown ids are 404, rejected input is 422, store failures are 500.
//!
//! ## Key Components
//!
//! - [`DatabasePool`] - connection pool with migration support
//! - [`NoteStore`] - record store CRUD over the pool
//! - [`NotesServer`] - hyper HTTP/1 service with graceful shutdown
//! - [`ServerError`] - error types for store operations

pub mod http;
pub mod seed;
pub mod store;

pub use http::NotesServer;
pub use store::{DatabasePool, NoteStore};

/// Errors that can occur in the record store
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to establish a database connection
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A database query failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Schema migration failed
    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

impl From<sqlx::Error> for ServerError {
    fn from(e: sqlx::Error) -> Self {
        ServerError::QueryFailed(e.to_string())
    }
}

//! SQLite record store
//!
//! This module provides the durable side of the system: a connection pool
//! with automatic schema migration, and the [`NoteStore`] CRUD surface the
//! HTTP handlers call. Ids are SQLite rowids — assigned once at insert,
//! stable, and never reused for the lifetime of a database file.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use notewire_core::domain::{Note, NoteId};

use crate::ServerError;

/// Manages a pool of SQLite connections for note persistence
///
/// The pool is configured with:
/// - WAL journal mode for concurrent read access
/// - 5 max connections for file-based databases
/// - 1 connection for in-memory databases (required for data persistence)
/// - 5-second busy timeout to handle write contention
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Creates a new database pool connected to the specified file
    ///
    /// This will:
    /// 1. Create parent directories if they don't exist
    /// 2. Create the database file if it doesn't exist
    /// 3. Enable WAL journal mode
    /// 4. Run schema migrations
    ///
    /// # Errors
    ///
    /// Returns `ServerError::ConnectionFailed` if the connection cannot be
    /// established, or `ServerError::MigrationFailed` if migrations fail.
    pub async fn new(db_path: &Path) -> Result<Self, ServerError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ServerError::ConnectionFailed(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| {
                ServerError::ConnectionFailed(format!(
                    "Failed to connect to database at {}: {}",
                    db_path.display(),
                    e
                ))
            })?;

        Self::run_migrations(&pool).await?;

        tracing::info!(path = %db_path.display(), "Database pool initialized");

        Ok(Self { pool })
    }

    /// Creates an in-memory database pool for testing
    ///
    /// Uses a single connection to ensure data persistence across queries
    /// (SQLite in-memory databases are per-connection).
    pub async fn in_memory() -> Result<Self, ServerError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| {
                ServerError::ConnectionFailed(format!("Failed to create in-memory database: {}", e))
            })?;

        Self::run_migrations(&pool).await?;

        tracing::debug!("In-memory database pool initialized");

        Ok(Self { pool })
    }

    /// Returns a reference to the underlying SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Runs the initial schema migration
    async fn run_migrations(pool: &SqlitePool) -> Result<(), ServerError> {
        let migration_sql = include_str!("migrations/20260807_initial.sql");
        sqlx::raw_sql(migration_sql)
            .execute(pool)
            .await
            .map_err(|e| {
                ServerError::MigrationFailed(format!("Failed to run initial migration: {}", e))
            })?;

        tracing::debug!("Database migrations completed");
        Ok(())
    }
}

/// Record store CRUD over the notes table
///
/// Cheap to clone; clones share the underlying pool.
#[derive(Clone)]
pub struct NoteStore {
    pool: SqlitePool,
}

impl NoteStore {
    /// Creates a store over the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Lists all notes in id (creation) order
    pub async fn list(&self) -> Result<Vec<Note>, ServerError> {
        let rows = sqlx::query("SELECT id, body FROM notes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| Note::new(NoteId::new(row.get("id")), row.get::<String, _>("body")))
            .collect())
    }

    /// Fetches one note by id
    pub async fn get(&self, id: NoteId) -> Result<Option<Note>, ServerError> {
        let row = sqlx::query("SELECT id, body FROM notes WHERE id = ?")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Note::new(NoteId::new(row.get("id")), row.get::<String, _>("body"))))
    }

    /// Inserts a note and returns it with its assigned id
    pub async fn insert(&self, body: &str) -> Result<Note, ServerError> {
        let result = sqlx::query("INSERT INTO notes (body) VALUES (?)")
            .bind(body)
            .execute(&self.pool)
            .await?;

        let id = NoteId::new(result.last_insert_rowid());
        tracing::debug!(%id, "Note inserted");
        Ok(Note::new(id, body))
    }

    /// Overwrites a note's body; returns the updated note, or `None` if the
    /// id is unknown
    pub async fn update(&self, id: NoteId, body: &str) -> Result<Option<Note>, ServerError> {
        let result = sqlx::query("UPDATE notes SET body = ? WHERE id = ?")
            .bind(body)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(Note::new(id, body)))
    }

    /// Deletes a note; returns true if a record was removed
    pub async fn delete(&self, id: NoteId) -> Result<bool, ServerError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected() > 0;
        tracing::debug!(%id, removed, "Note delete executed");
        Ok(removed)
    }

    /// Number of notes held
    pub async fn count(&self) -> Result<i64, ServerError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM notes")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("n"))
    }
}

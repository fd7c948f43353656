//! Starter note seeding
//!
//! Optionally populates an empty database with a few orientation notes, so
//! a fresh install has something to render. Seeding is idempotent at the
//! store level: a database that already holds any note is left untouched.

use tracing::info;

use crate::store::NoteStore;
use crate::ServerError;

/// Orientation notes inserted into an empty store
const STARTER_NOTES: &[&str] = &[
    "Welcome to Notewire. Every note you see here lives on the server.",
    "Create a note with `notewire add <text>`; it appears once the server has assigned it an id.",
    "Edit with `notewire edit <id> <text>` and delete with `notewire delete <id>`.",
    "Deletion is permanent. There is no undo.",
];

/// Seeds starter notes into an empty store
///
/// Returns the number of notes inserted (zero when the store already held
/// any note).
pub async fn seed_if_empty(store: &NoteStore) -> Result<usize, ServerError> {
    if store.count().await? > 0 {
        return Ok(0);
    }

    for body in STARTER_NOTES {
        store.insert(body).await?;
    }

    info!(count = STARTER_NOTES.len(), "Seeded starter notes");
    Ok(STARTER_NOTES.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DatabasePool;

    #[tokio::test]
    async fn test_seed_only_fills_empty_store() {
        let pool = DatabasePool::in_memory().await.unwrap();
        let store = NoteStore::new(pool.pool().clone());

        let seeded = seed_if_empty(&store).await.unwrap();
        assert_eq!(seeded, STARTER_NOTES.len());

        // A second pass is a no-op
        assert_eq!(seed_if_empty(&store).await.unwrap(), 0);
        assert_eq!(store.count().await.unwrap() as usize, STARTER_NOTES.len());
    }

    #[tokio::test]
    async fn test_seed_skips_populated_store() {
        let pool = DatabasePool::in_memory().await.unwrap();
        let store = NoteStore::new(pool.pool().clone());
        store.insert("existing").await.unwrap();

        assert_eq!(seed_if_empty(&store).await.unwrap(), 0);
        assert_eq!(store.count().await.unwrap(), 1);
    }
}

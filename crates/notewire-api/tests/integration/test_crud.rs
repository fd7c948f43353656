//! Integration tests for the CRUD round-trips
//!
//! Verifies wire shapes against a wiremock-based Notewire server mock:
//! list decoding, create acknowledgment, patch bodies, and both delete
//! acknowledgment spellings.

use notewire_core::domain::{NoteDraft, NoteId, NotePatch};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common;

// ============================================================================
// List / fetch
// ============================================================================

#[tokio::test]
async fn test_list_notes_decodes_array() {
    let (server, client) = common::setup_api_mock().await;
    common::mount_list(
        &server,
        serde_json::json!([
            {"id": 1, "body": "first"},
            {"id": 2, "body": "second"}
        ]),
    )
    .await;

    let notes = client.list_notes().await.expect("list failed");

    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id(), NoteId::new(1));
    assert_eq!(notes[0].body(), "first");
    assert_eq!(notes[1].id(), NoteId::new(2));
}

#[tokio::test]
async fn test_list_notes_empty_server() {
    let (server, client) = common::setup_api_mock().await;
    common::mount_list(&server, serde_json::json!([])).await;

    let notes = client.list_notes().await.expect("list failed");
    assert!(notes.is_empty());
}

#[tokio::test]
async fn test_get_note_by_id() {
    let (server, client) = common::setup_api_mock().await;
    Mock::given(method("GET"))
        .and(path("/notes/5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 5, "body": "solo"})),
        )
        .mount(&server)
        .await;

    let note = client.get_note(NoteId::new(5)).await.expect("fetch failed");
    assert_eq!(note.id(), NoteId::new(5));
    assert_eq!(note.body(), "solo");
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_note_sends_body_and_decodes_ack() {
    let (server, client) = common::setup_api_mock().await;

    Mock::given(method("POST"))
        .and(path("/notes"))
        .and(body_json(serde_json::json!({"body": "new note"})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({"id": 10, "body": "new note"})),
        )
        .mount(&server)
        .await;

    let draft = NoteDraft::new("new note").unwrap();
    let note = client.create_note(&draft).await.expect("create failed");

    assert_eq!(note.id(), NoteId::new(10));
    assert_eq!(note.body(), "new note");
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_note_sends_patch() {
    let (server, client) = common::setup_api_mock().await;

    Mock::given(method("PATCH"))
        .and(path("/notes/3"))
        .and(body_json(serde_json::json!({"body": "edited"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 3, "body": "edited"})),
        )
        .mount(&server)
        .await;

    let patch = NotePatch::new().with_body("edited");
    let note = client
        .update_note(NoteId::new(3), &patch)
        .await
        .expect("update failed");

    assert_eq!(note.id(), NoteId::new(3));
    assert_eq!(note.body(), "edited");
}

// ============================================================================
// Delete acknowledgment variants
// ============================================================================

#[tokio::test]
async fn test_delete_note_plain_ack() {
    let (server, client) = common::setup_api_mock().await;
    common::mount_delete(&server, 4, 200, serde_json::json!({"id": 4})).await;

    let ack = client
        .delete_note(NoteId::new(4))
        .await
        .expect("delete failed");
    assert_eq!(ack.id, NoteId::new(4));
    assert!(ack.message.is_none());
}

#[tokio::test]
async fn test_delete_note_legacy_ack_with_message() {
    let (server, client) = common::setup_api_mock().await;
    common::mount_delete(
        &server,
        4,
        200,
        serde_json::json!({"noteId": 4, "message": "Zap! Note deleted"}),
    )
    .await;

    let ack = client
        .delete_note(NoteId::new(4))
        .await
        .expect("delete failed");
    assert_eq!(ack.id, NoteId::new(4));
    assert_eq!(ack.message.as_deref(), Some("Zap! Note deleted"));
}

#[tokio::test]
async fn test_delete_note_no_content() {
    let (server, client) = common::setup_api_mock().await;
    Mock::given(method("DELETE"))
        .and(path("/notes/4"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let ack = client
        .delete_note(NoteId::new(4))
        .await
        .expect("delete failed");
    assert_eq!(ack.id, NoteId::new(4));
    assert!(ack.message.is_none());
}

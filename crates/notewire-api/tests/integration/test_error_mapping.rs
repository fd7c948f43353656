//! Integration tests for status → error mapping
//!
//! The contract: any non-2xx status is a failure regardless of body content.
//! 404-class maps to NotFound, 422-class to Validation, everything else to
//! Network — including unreachable servers and garbage bodies.

use notewire_api::provider::HttpNoteTransport;
use notewire_core::domain::{NoteDraft, NoteId, NotePatch};
use notewire_core::ports::{INoteTransport, TransportError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn test_update_missing_note_is_not_found() {
    let (server, client) = common::setup_api_mock().await;
    Mock::given(method("PATCH"))
        .and(path("/notes/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client
        .update_note(NoteId::new(99), &NotePatch::new().with_body("x"))
        .await
        .unwrap_err();
    assert_eq!(err, TransportError::NotFound(NoteId::new(99)));
}

#[tokio::test]
async fn test_delete_missing_note_is_not_found() {
    let (server, client) = common::setup_api_mock().await;
    Mock::given(method("DELETE"))
        .and(path("/notes/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.delete_note(NoteId::new(99)).await.unwrap_err();
    assert_eq!(err, TransportError::NotFound(NoteId::new(99)));
}

#[tokio::test]
async fn test_create_rejected_input_is_validation() {
    let (server, client) = common::setup_api_mock().await;
    Mock::given(method("POST"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(422).set_body_string("body must not be empty"))
        .mount(&server)
        .await;

    let err = client
        .create_note(&NoteDraft::new("x").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Validation(msg) if msg.contains("must not be empty")));
}

#[tokio::test]
async fn test_server_error_is_network() {
    let (server, client) = common::setup_api_mock().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client.list_notes().await.unwrap_err();
    assert!(matches!(err, TransportError::Network(msg) if msg.contains("500")));
}

#[tokio::test]
async fn test_delete_failure_is_never_success() {
    // A failure body may still carry success-sounding messaging; the
    // status alone decides.
    let (server, client) = common::setup_api_mock().await;
    common::mount_delete(
        &server,
        7,
        500,
        serde_json::json!({"message": "Zap! Note deleted"}),
    )
    .await;

    let err = client.delete_note(NoteId::new(7)).await.unwrap_err();
    assert!(matches!(err, TransportError::Network(_)));
}

#[tokio::test]
async fn test_undecodable_body_is_network() {
    let (server, client) = common::setup_api_mock().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client.list_notes().await.unwrap_err();
    assert!(matches!(err, TransportError::Network(msg) if msg.contains("invalid response body")));
}

#[tokio::test]
async fn test_unreachable_server_is_network() {
    // Nothing is listening on this port.
    let transport = HttpNoteTransport::new("http://127.0.0.1:9");
    let err = transport.list().await.unwrap_err();
    assert!(matches!(err, TransportError::Network(_)));
}

#[tokio::test]
async fn test_transport_port_maps_like_client() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/notes/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let transport = HttpNoteTransport::new(server.uri());
    let err = transport
        .update(NoteId::new(1), &NotePatch::new().with_body("x"))
        .await
        .unwrap_err();
    assert_eq!(err, TransportError::NotFound(NoteId::new(1)));
}

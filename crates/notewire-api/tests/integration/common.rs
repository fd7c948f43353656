//! Shared test helpers for notes API integration tests
//!
//! Provides wiremock-based mock server setup for the Notewire server
//! endpoints. Each helper mounts the necessary mock endpoints and returns a
//! configured client pointing at the mock server.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use notewire_api::client::ApiClient;

/// Starts a mock server and returns it with an ApiClient pointed at it.
pub async fn setup_api_mock() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(server.uri());
    (server, client)
}

/// Mounts `GET /notes` returning the given JSON array.
pub async fn mount_list(server: &MockServer, notes: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(notes))
        .mount(server)
        .await;
}

/// Mounts `POST /notes` replying 201 with the given note JSON.
pub async fn mount_create(server: &MockServer, note: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(201).set_body_json(note))
        .mount(server)
        .await;
}

/// Mounts `DELETE /notes/{id}` replying with the given status and body.
pub async fn mount_delete(server: &MockServer, id: i64, status: u16, body: serde_json::Value) {
    Mock::given(method("DELETE"))
        .and(path(format!("/notes/{id}")))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

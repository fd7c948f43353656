//! HTTP API server
//!
//! Serves the notes JSON API over HTTP/1. Request handling is a direct
//! mapping of verbs to record store operations; the handler is generic over
//! the request body type so tests can drive it without a socket.

use std::net::SocketAddr;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use notewire_core::domain::NoteId;

use crate::store::NoteStore;

/// Request payload for create and update
///
/// Mirrors the permitted params of the API: the body text and nothing else.
#[derive(Debug, Deserialize)]
struct NoteParams {
    body: Option<String>,
}

/// HTTP server that exposes the notes API on a bound address.
pub struct NotesServer {
    listener: TcpListener,
    store: NoteStore,
}

impl NotesServer {
    /// Binds the server to an address
    ///
    /// # Arguments
    /// * `addr` - Address to bind, e.g. `"127.0.0.1:3000"` (port 0 picks a
    ///   free port; see [`NotesServer::local_addr`])
    /// * `store` - The record store backing the API
    pub async fn bind(addr: &str, store: NoteStore) -> anyhow::Result<Self> {
        let addr: SocketAddr = addr.parse()?;
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, store })
    }

    /// The address the server actually bound
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Runs the accept loop. This future runs indefinitely until the
    /// provided cancellation token is triggered.
    ///
    /// Should be spawned as a background task.
    pub async fn run(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        info!(addr = %self.listener.local_addr()?, "Notes server listening");

        loop {
            tokio::select! {
                result = self.listener.accept() => {
                    let (stream, _) = result?;
                    let io = TokioIo::new(stream);
                    let store = self.store.clone();

                    tokio::spawn(async move {
                        let service = service_fn(move |req| {
                            let store = store.clone();
                            async move {
                                Ok::<_, std::convert::Infallible>(
                                    handle_request(req, &store).await,
                                )
                            }
                        });

                        if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                            error!(error = %e, "HTTP connection error");
                        }
                    });
                }
                _ = shutdown.cancelled() => {
                    info!("Notes server shutting down");
                    break;
                }
            }
        }

        Ok(())
    }
}

/// Handle a single HTTP request.
///
/// Generic over the body type so tests can pass `Full<Bytes>` requests
/// directly instead of going through a connection.
pub async fn handle_request<B>(req: Request<B>, store: &NoteStore) -> Response<Full<Bytes>>
where
    B: hyper::body::Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "Handling request");

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (&method, segments.as_slice()) {
        (&Method::GET, ["notes"]) => index(store).await,
        (&Method::POST, ["notes"]) => create(req, store).await,
        (&Method::GET, ["notes", id]) => match parse_id(id) {
            Some(id) => show(id, store).await,
            None => not_found(),
        },
        (&Method::PATCH | &Method::PUT, ["notes", id]) => match parse_id(id) {
            Some(id) => update(req, id, store).await,
            None => not_found(),
        },
        (&Method::DELETE, ["notes", id]) => match parse_id(id) {
            Some(id) => destroy(id, store).await,
            None => not_found(),
        },
        _ => not_found(),
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn index(store: &NoteStore) -> Response<Full<Bytes>> {
    match store.list().await {
        Ok(notes) => json(StatusCode::OK, &notes),
        Err(e) => internal_error(&e),
    }
}

async fn show(id: NoteId, store: &NoteStore) -> Response<Full<Bytes>> {
    match store.get(id).await {
        Ok(Some(note)) => json(StatusCode::OK, &note),
        Ok(None) => not_found(),
        Err(e) => internal_error(&e),
    }
}

async fn create<B>(req: Request<B>, store: &NoteStore) -> Response<Full<Bytes>>
where
    B: hyper::body::Body,
    B::Error: std::fmt::Display,
{
    let params = match read_params(req).await {
        Ok(params) => params,
        Err(response) => return *response,
    };

    let body = params.body.unwrap_or_default();
    if body.trim().is_empty() {
        return unprocessable("body must not be empty");
    }

    match store.insert(&body).await {
        Ok(note) => json(StatusCode::CREATED, &note),
        Err(e) => internal_error(&e),
    }
}

async fn update<B>(req: Request<B>, id: NoteId, store: &NoteStore) -> Response<Full<Bytes>>
where
    B: hyper::body::Body,
    B::Error: std::fmt::Display,
{
    let params = match read_params(req).await {
        Ok(params) => params,
        Err(response) => return *response,
    };

    match params.body {
        Some(body) if body.trim().is_empty() => unprocessable("body must not be empty"),
        Some(body) => match store.update(id, &body).await {
            Ok(Some(note)) => json(StatusCode::OK, &note),
            Ok(None) => not_found(),
            Err(e) => internal_error(&e),
        },
        // A patch with no recognized fields changes nothing; echo the
        // current record so the reply shape matches a real update.
        None => show(id, store).await,
    }
}

async fn destroy(id: NoteId, store: &NoteStore) -> Response<Full<Bytes>> {
    match store.delete(id).await {
        Ok(true) => json(
            StatusCode::OK,
            &serde_json::json!({"id": id, "message": "Note deleted"}),
        ),
        Ok(false) => not_found(),
        Err(e) => internal_error(&e),
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_id(raw: &str) -> Option<NoteId> {
    raw.parse::<NoteId>().ok()
}

/// Reads and decodes the request body; failures are already responses
async fn read_params<B>(req: Request<B>) -> Result<NoteParams, Box<Response<Full<Bytes>>>>
where
    B: hyper::body::Body,
    B::Error: std::fmt::Display,
{
    let bytes = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            error!(error = %e, "Failed to read request body");
            return Err(Box::new(internal_error(&"body read failed")));
        }
    };

    if bytes.is_empty() {
        return Ok(NoteParams { body: None });
    }

    serde_json::from_slice(&bytes)
        .map_err(|e| Box::new(unprocessable(&format!("invalid JSON: {e}"))))
}

fn json<T: serde::Serialize>(status: StatusCode, value: &T) -> Response<Full<Bytes>> {
    let body = serde_json::to_vec(value).unwrap_or_default();
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

fn not_found() -> Response<Full<Bytes>> {
    json(
        StatusCode::NOT_FOUND,
        &serde_json::json!({"error": "Not Found"}),
    )
}

fn unprocessable(message: &str) -> Response<Full<Bytes>> {
    json(
        StatusCode::UNPROCESSABLE_ENTITY,
        &serde_json::json!({"error": message}),
    )
}

fn internal_error(err: &dyn std::fmt::Display) -> Response<Full<Bytes>> {
    error!(error = %err, "Request failed");
    json(
        StatusCode::INTERNAL_SERVER_ERROR,
        &serde_json::json!({"error": "Internal Server Error"}),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DatabasePool;

    async fn store() -> NoteStore {
        let pool = DatabasePool::in_memory().await.unwrap();
        NoteStore::new(pool.pool().clone())
    }

    fn request(method: Method, path: &str, body: Option<serde_json::Value>) -> Request<Full<Bytes>> {
        let bytes = body
            .map(|value| serde_json::to_vec(&value).unwrap())
            .unwrap_or_default();
        Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Full::new(Bytes::from(bytes)))
            .unwrap()
    }

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_index_lists_notes_in_creation_order() {
        let store = store().await;
        store.insert("a").await.unwrap();
        store.insert("b").await.unwrap();

        let response = handle_request(request(Method::GET, "/notes", None), &store).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let bodies: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["body"].as_str().unwrap())
            .collect();
        assert_eq!(bodies, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_replies_201() {
        let store = store().await;

        let response = handle_request(
            request(Method::POST, "/notes", Some(serde_json::json!({"body": "hi"}))),
            &store,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert!(json["id"].as_i64().unwrap() > 0);
        assert_eq!(json["body"], "hi");
    }

    #[tokio::test]
    async fn test_create_empty_body_is_422() {
        let store = store().await;

        let response = handle_request(
            request(Method::POST, "/notes", Some(serde_json::json!({"body": "  "}))),
            &store,
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_invalid_json_is_422() {
        let store = store().await;
        let req = Request::builder()
            .method(Method::POST)
            .uri("/notes")
            .body(Full::new(Bytes::from_static(b"not json")))
            .unwrap();

        let response = handle_request(req, &store).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_show_and_missing_note() {
        let store = store().await;
        let note = store.insert("here").await.unwrap();

        let path = format!("/notes/{}", note.id());
        let response = handle_request(request(Method::GET, &path, None), &store).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = handle_request(request(Method::GET, "/notes/999", None), &store).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_via_patch_and_put() {
        let store = store().await;
        let note = store.insert("v1").await.unwrap();
        let path = format!("/notes/{}", note.id());

        let response = handle_request(
            request(Method::PATCH, &path, Some(serde_json::json!({"body": "v2"}))),
            &store,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["body"], "v2");

        let response = handle_request(
            request(Method::PUT, &path, Some(serde_json::json!({"body": "v3"}))),
            &store,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.get(note.id()).await.unwrap().unwrap().body(), "v3");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_404() {
        let store = store().await;
        let response = handle_request(
            request(
                Method::PATCH,
                "/notes/42",
                Some(serde_json::json!({"body": "x"})),
            ),
            &store,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_acknowledges_with_id() {
        let store = store().await;
        let note = store.insert("bye").await.unwrap();
        let path = format!("/notes/{}", note.id());

        let response = handle_request(request(Method::DELETE, &path, None), &store).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["id"].as_i64().unwrap(), note.id().as_i64());
        assert!(json["message"].as_str().is_some());

        // Second delete of the same id: the record is gone, so 404.
        let response = handle_request(request(Method::DELETE, &path, None), &store).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let store = store().await;
        let response = handle_request(request(Method::GET, "/unknown", None), &store).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response =
            handle_request(request(Method::GET, "/notes/not-a-number", None), &store).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

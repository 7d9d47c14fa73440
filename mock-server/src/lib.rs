//! Collector stand-in for exercising the transport over real HTTP.
//!
//! `POST /` remembers the body verbatim and answers `ok` with a fixed
//! `server` and `content-type`. `POST /moved` answers 302 to `/landing`,
//! `POST /large` answers with a `LARGE_BODY_LEN`-byte body. Every request to
//! these routes is recorded as a `Hit`, so tests can count what went out.
//! `GET /received` lists the recorded bodies as lossy UTF-8, one per line.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use bytes::Bytes;
use tokio::{net::TcpListener, sync::RwLock};

pub const SERVER_NAME: &str = "mock-collector";
pub const REPLY: &str = "ok";
pub const REDIRECT_TARGET: &str = "/landing";

/// Larger than ureq's default 10 MiB read limit.
pub const LARGE_BODY_LEN: usize = 11 * 1024 * 1024;

/// One request as the server saw it.
#[derive(Clone, Debug)]
pub struct Hit {
    pub method: Method,
    pub path: String,
    pub body: Bytes,
}

pub type Received = Arc<RwLock<Vec<Hit>>>;

pub fn app() -> Router {
    app_with(Received::default())
}

/// Build the router over a caller-owned store, so tests can inspect it.
pub fn app_with(received: Received) -> Router {
    Router::new()
        .route("/", post(collect))
        .route("/moved", post(moved))
        .route(REDIRECT_TARGET, get(landing).post(landing))
        .route("/large", post(large))
        .route("/received", get(list_received))
        .with_state(received)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, received: Received) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(received)).await
}

async fn record(received: &Received, method: Method, uri: &Uri, body: Bytes) {
    received.write().await.push(Hit {
        method,
        path: uri.path().to_string(),
        body,
    });
}

async fn collect(
    State(received): State<Received>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> impl IntoResponse {
    record(&received, method, &uri, body).await;
    (
        StatusCode::OK,
        [
            (header::SERVER, SERVER_NAME),
            (header::CONTENT_TYPE, "text/plain"),
        ],
        REPLY,
    )
}

async fn moved(
    State(received): State<Received>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> impl IntoResponse {
    record(&received, method, &uri, body).await;
    (
        StatusCode::FOUND,
        [
            (header::SERVER, SERVER_NAME),
            (header::LOCATION, REDIRECT_TARGET),
        ],
    )
}

async fn landing(
    State(received): State<Received>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> impl IntoResponse {
    record(&received, method, &uri, body).await;
    ([(header::SERVER, "landing")], REPLY)
}

async fn large(
    State(received): State<Received>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> impl IntoResponse {
    record(&received, method, &uri, body).await;
    (
        [(header::CONTENT_TYPE, "application/octet-stream")],
        vec![b'x'; LARGE_BODY_LEN],
    )
}

async fn list_received(State(received): State<Received>) -> String {
    let received = received.read().await;
    received
        .iter()
        .map(|hit| String::from_utf8_lossy(&hit.body).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

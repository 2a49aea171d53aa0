//! Local HTTP stubs for exercising the reqwest clients in tests.

use axum::{http::StatusCode, routing::post, Router};
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral loopback port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A router answering every POST to `path` with a fixed status and body.
pub fn canned(path: &str, status: StatusCode, body: &'static str) -> Router {
    Router::new().route(path, post(move || async move { (status, body) }))
}

/// A base URL nothing listens on.
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

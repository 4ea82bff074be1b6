#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use portfolio_api::{app_router, AppState, Backend, Document, FileStore, MemoryStore, SiteConfig};
use serde_json::Value;
use tower::ServiceExt;

/// Config with every variable unset: file backend defaults, no static dir.
pub fn test_config() -> SiteConfig {
    SiteConfig::from_lookup(|_| None).unwrap()
}

/// App over an in-memory document. The store is returned so tests can inspect it directly.
pub fn memory_app(document: Document) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new(document));
    let state = AppState::new(Backend::Document(store.clone()));
    (app_router(state, &test_config()), store)
}

pub fn file_app(path: &Path) -> Router {
    let state = AppState::new(Backend::Document(Arc::new(FileStore::new(path))));
    app_router(state, &test_config())
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

//! Response helpers shared by the resource handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Body returned by a successful delete.
#[derive(Serialize, Debug)]
pub struct Acknowledged {
    pub ok: bool,
}

/// Body of every JSON error response: `{"error": "..."}`.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn acknowledged() -> (StatusCode, Json<Acknowledged>) {
    (StatusCode::OK, Json(Acknowledged { ok: true }))
}

pub fn error_body(message: String) -> ErrorBody {
    ErrorBody { error: message }
}

//! Typed errors and HTTP mapping.

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::error_body;

/// Methods the resource endpoint answers, as advertised in `Allow`.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
    #[error("remote backend url must start with http:// or https://: '{0}'")]
    InvalidRemoteUrl(String),
    #[error("http client: {0}")]
    HttpClient(String),
}

/// Failure persisting the document. Reads never fail; see [`crate::store::DocumentStore::read`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("not a writable directory: {0}")]
    Unwritable(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found")]
    ResourceNotFound(String),
    #[error("Method {0} Not Allowed")]
    MethodNotAllowed(Method),
    #[error("{0}")]
    Backend(String),
    #[error("storage: {0}")]
    Storage(#[from] StoreError),
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::ResourceNotFound(name) => {
                tracing::debug!(resource = %name, "unknown resource");
                (StatusCode::NOT_FOUND, Json(error_body(self.to_string()))).into_response()
            }
            AppError::MethodNotAllowed(_) => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, ALLOWED_METHODS)],
                self.to_string(),
            )
                .into_response(),
            AppError::Backend(message) => {
                tracing::error!(error = %message, "backend request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error_body(self.to_string()))).into_response()
            }
            AppError::Storage(e) => {
                tracing::error!(error = %e, "document write failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error_body(self.to_string()))).into_response()
            }
            AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, Json(error_body(self.to_string()))).into_response()
            }
        }
    }
}

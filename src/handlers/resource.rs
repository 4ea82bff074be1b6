//! Resource handlers: `/api/:resource` with GET, POST, PUT and DELETE.

use crate::error::AppError;
use crate::resource::Resource;
use crate::response::{acknowledged, created, success};
use crate::service::CrudService;
use crate::state::{AppState, Backend};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::Method,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

pub async fn list(
    State(state): State<AppState>,
    Path(resource): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let items = CrudService::list(&state.backend, &resource).await?;
    Ok(success(items))
}

/// The resource name is checked before the body, so unknown resources answer 404
/// whatever the payload.
pub async fn create(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    CrudService::check_name(&state.backend, &resource)?;
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return Ok(rejection.into_response()),
    };
    let item = CrudService::create(&state.backend, &resource, body).await?;
    Ok(created(item).into_response())
}

pub async fn replace(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    CrudService::check_name(&state.backend, &resource)?;
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return Ok(rejection.into_response()),
    };
    let result = CrudService::replace(&state.backend, &resource, body).await?;
    Ok(success(result).into_response())
}

pub async fn delete(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let id = params.get("id").map(String::as_str);
    CrudService::delete(&state.backend, &resource, id).await?;
    Ok(acknowledged())
}

/// Any other method. Unknown document resources still answer 404 first.
pub async fn method_not_allowed(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    method: Method,
) -> AppError {
    if let Backend::Document(_) = state.backend {
        if let Err(e) = resource.parse::<Resource>() {
            return e;
        }
    }
    AppError::MethodNotAllowed(method)
}

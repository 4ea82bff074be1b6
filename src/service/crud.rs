//! Generic CRUD execution against the configured backend.

use super::ids::{coerce_query_id, strictly_equal};
use crate::error::AppError;
use crate::resource::{Resource, TableName};
use crate::state::Backend;
use serde_json::{Map, Value};

pub struct CrudService;

impl CrudService {
    /// Fails with `ResourceNotFound` when the backend cannot serve `name`.
    pub fn check_name(backend: &Backend, name: &str) -> Result<(), AppError> {
        match backend {
            Backend::Document(_) => name.parse::<Resource>().map(|_| ()),
            Backend::Remote(_) => TableName::parse(name).map(|_| ()),
        }
    }

    /// Every item in the collection, in stored order.
    pub async fn list(backend: &Backend, name: &str) -> Result<Vec<Value>, AppError> {
        match backend {
            Backend::Document(store) => {
                let resource: Resource = name.parse()?;
                let document = store.read().await;
                Ok(document.collection(resource).clone())
            }
            Backend::Remote(tables) => {
                let table = TableName::parse(name)?;
                tables.list(&table).await
            }
        }
    }

    /// Appends the body as a new item (any JSON value is accepted). Returns the created item.
    pub async fn create(backend: &Backend, name: &str, item: Value) -> Result<Value, AppError> {
        match backend {
            Backend::Document(store) => {
                let resource: Resource = name.parse()?;
                let mut document = store.read().await;
                document.collection_mut(resource).push(item.clone());
                store.write(&document).await?;
                tracing::debug!(resource = %resource, "item created");
                Ok(item)
            }
            Backend::Remote(tables) => {
                let table = TableName::parse(name)?;
                tables.create(&table, item).await
            }
        }
    }

    /// Array body: bulk replace (document) or bulk upsert (remote).
    /// Object body: update the item(s) matching the body's `id`.
    pub async fn replace(backend: &Backend, name: &str, body: Value) -> Result<Value, AppError> {
        match backend {
            Backend::Document(store) => {
                let resource: Resource = name.parse()?;
                let mut document = store.read().await;
                let collection = document.collection_mut(resource);
                match body {
                    Value::Array(items) => *collection = items,
                    Value::Object(patch) => {
                        let items = std::mem::take(collection);
                        *collection = update_by_id(items, patch);
                    }
                    _ => return Err(not_array_or_object()),
                }
                store.write(&document).await?;
                tracing::debug!(resource = %resource, "collection replaced");
                Ok(Value::Array(document.collection(resource).clone()))
            }
            Backend::Remote(tables) => {
                let table = TableName::parse(name)?;
                match body {
                    Value::Array(rows) => tables.upsert_many(&table, rows).await,
                    Value::Object(mut fields) => {
                        let id = fields
                            .remove("id")
                            .ok_or_else(|| AppError::BadRequest("body must include an id".into()))?;
                        tables.update(&table, &id, fields).await
                    }
                    _ => Err(not_array_or_object()),
                }
            }
        }
    }

    /// Removes the item(s) addressed by the `id` query value.
    pub async fn delete(backend: &Backend, name: &str, id: Option<&str>) -> Result<(), AppError> {
        match backend {
            Backend::Document(store) => {
                let resource: Resource = name.parse()?;
                let id = id.ok_or_else(missing_id)?;
                let mut document = store.read().await;
                let removed = remove_by_coerced_id(document.collection_mut(resource), id);
                store.write(&document).await?;
                tracing::debug!(resource = %resource, id = %id, removed, "items deleted");
                Ok(())
            }
            Backend::Remote(tables) => {
                let table = TableName::parse(name)?;
                let id = id.ok_or_else(missing_id)?;
                tables.delete(&table, id).await
            }
        }
    }
}

fn not_array_or_object() -> AppError {
    AppError::BadRequest("body must be a JSON array or object".into())
}

fn missing_id() -> AppError {
    AppError::BadRequest("missing id query parameter".into())
}

/// Replaces every item whose `id` strictly equals the patch's `id` with
/// `{id, ...rest}`. Fields of the old item not present in the patch are dropped.
pub fn update_by_id(items: Vec<Value>, mut patch: Map<String, Value>) -> Vec<Value> {
    let id = patch.remove("id");
    let mut replacement = Map::with_capacity(patch.len() + 1);
    if let Some(id) = &id {
        replacement.insert("id".to_string(), id.clone());
    }
    replacement.extend(patch);

    items
        .into_iter()
        .map(|item| {
            if strictly_equal(item.get("id"), id.as_ref()) {
                Value::Object(replacement.clone())
            } else {
                item
            }
        })
        .collect()
}

/// Drops items whose numeric `id` equals the integer-coerced query value.
/// A value with no leading digits matches nothing. Returns the number removed.
pub fn remove_by_coerced_id(items: &mut Vec<Value>, raw_id: &str) -> usize {
    let Some(id) = coerce_query_id(raw_id) else {
        return 0;
    };
    let before = items.len();
    items.retain(|item| item.get("id").and_then(Value::as_f64) != Some(id));
    before - items.len()
}

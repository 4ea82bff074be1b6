//! Storage backends. Document stores hold the whole site document; table stores
//! map each resource onto a table of a hosted backend.

mod file;
mod memory;
mod remote;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use remote::RemoteTableStore;

use crate::document::Document;
use crate::error::{AppError, StoreError};
use crate::resource::TableName;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Whole-document storage. Every mutating request reads the full document,
/// changes it and writes it back; there is no locking between requests.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Never fails: a missing or unreadable document yields `Document::default()`.
    async fn read(&self) -> Document;

    /// Overwrites the stored document in full.
    async fn write(&self, document: &Document) -> Result<(), StoreError>;

    /// Whether a write could currently succeed. Used by the readiness route.
    async fn check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Per-table storage on a remote backend. Every call is one network request.
#[async_trait]
pub trait TableStore: Send + Sync {
    async fn list(&self, table: &TableName) -> Result<Vec<Value>, AppError>;

    /// Inserts one row and returns it as stored.
    async fn create(&self, table: &TableName, item: Value) -> Result<Value, AppError>;

    /// Insert-or-update every row by primary key.
    async fn upsert_many(&self, table: &TableName, rows: Vec<Value>) -> Result<Value, AppError>;

    /// Sets `fields` on the row whose `id` equals `id`.
    async fn update(&self, table: &TableName, id: &Value, fields: Map<String, Value>) -> Result<Value, AppError>;

    /// Deletes rows whose `id` equals the raw query value.
    async fn delete(&self, table: &TableName, id: &str) -> Result<(), AppError>;

    /// Cheap reachability check used by the readiness route.
    async fn ping(&self) -> Result<(), AppError>;
}

use super::DocumentStore;
use crate::document::Document;
use crate::error::StoreError;
use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};

/// Document held in process memory. Same read-modify-write contract as
/// [`super::FileStore`]; the lock only guards each individual read or write.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RwLock<Document>,
}

impl MemoryStore {
    pub fn new(document: Document) -> Self {
        MemoryStore {
            document: RwLock::new(document),
        }
    }

    /// Current contents, without going through the trait.
    pub fn snapshot(&self) -> Document {
        self.document.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn read(&self) -> Document {
        self.snapshot()
    }

    async fn write(&self, document: &Document) -> Result<(), StoreError> {
        *self.document.write().unwrap_or_else(PoisonError::into_inner) = document.clone();
        Ok(())
    }
}

use super::DocumentStore;
use crate::document::Document;
use crate::error::StoreError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Document stored as a single pretty-printed JSON file.
///
/// Writes overwrite the file in place (no temp file, no rename); a crash
/// mid-write leaves a truncated file, which later reads treat as empty.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn read(&self) -> Document {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "document unreadable, using empty document");
                return Document::default();
            }
        };
        match serde_json::from_str(&json) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "document unparsable, using empty document");
                Document::default()
            }
        }
    }

    async fn write(&self, document: &Document) -> Result<(), StoreError> {
        let json = document.to_pretty_json()?;
        tokio::fs::write(&self.path, json).await?;
        tracing::debug!(path = %self.path.display(), "document written");
        Ok(())
    }

    /// The file's directory must exist and not be read-only; the file itself may be absent.
    async fn check(&self) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let metadata = tokio::fs::metadata(dir).await?;
        if !metadata.is_dir() || metadata.permissions().readonly() {
            return Err(StoreError::Unwritable(dir.display().to_string()));
        }
        Ok(())
    }
}

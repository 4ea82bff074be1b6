//! Shared application state: the storage backend chosen at startup.

use crate::config::SiteConfig;
use crate::error::ConfigError;
use crate::store::{DocumentStore, FileStore, RemoteTableStore, TableStore};
use std::sync::Arc;
use std::time::Duration;

/// Storage the resource routes operate on. Document backends serve the fixed
/// set of collections; the remote backend serves any table name.
#[derive(Clone)]
pub enum Backend {
    Document(Arc<dyn DocumentStore>),
    Remote(Arc<dyn TableStore>),
}

impl Backend {
    /// Remote backend when credentials are configured, otherwise the document file.
    pub fn from_config(config: &SiteConfig) -> Result<Self, ConfigError> {
        match &config.remote {
            Some(remote) => {
                let timeout = Duration::from_secs(config.remote_timeout_secs);
                let store = RemoteTableStore::new(remote, timeout)?;
                tracing::info!(url = %remote.url, "using remote table backend");
                Ok(Backend::Remote(Arc::new(store)))
            }
            None => {
                tracing::info!(path = %config.data_path.display(), "using document file backend");
                Ok(Backend::Document(Arc::new(FileStore::new(&config.data_path))))
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Backend::Document(_) => "document",
            Backend::Remote(_) => "remote",
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub backend: Backend,
}

impl AppState {
    pub fn new(backend: Backend) -> Self {
        AppState { backend }
    }
}

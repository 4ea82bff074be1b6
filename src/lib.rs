//! Portfolio API: generic CRUD over the site's named collections, stored in a
//! JSON document file or in tables of a hosted backend.

pub mod config;
pub mod document;
pub mod error;
pub mod handlers;
pub mod resource;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{RemoteConfig, SiteConfig};
pub use document::Document;
pub use error::{AppError, ConfigError, StoreError};
pub use resource::{Resource, TableName};
pub use routes::{app_router, common_routes, resource_routes};
pub use service::CrudService;
pub use state::{AppState, Backend};
pub use store::{DocumentStore, FileStore, MemoryStore, RemoteTableStore, TableStore};

//! HTTP handlers for the resource endpoint.

pub mod resource;
pub use resource::*;

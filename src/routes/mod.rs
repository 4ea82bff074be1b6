//! Route assembly.

mod common;
mod resource;

pub use common::common_routes;
pub use resource::resource_routes;

use crate::config::SiteConfig;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application: common routes, `/api/:resource`, optional static site, body limit and request tracing.
pub fn app_router(state: AppState, config: &SiteConfig) -> Router {
    let mut router = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", resource_routes(state));
    if let Some(dir) = &config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }
    router
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}

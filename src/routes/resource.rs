//! Resource CRUD route. One parameterized path; handlers resolve the resource by name.

use crate::handlers::resource::{create, delete as delete_handler, list, method_not_allowed, replace};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/:resource",
            get(list)
                .post(create)
                .put(replace)
                .delete(delete_handler)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}

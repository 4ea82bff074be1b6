//! CrudService: list/create/replace/delete dispatched to the configured backend.

mod crud;
mod ids;
pub use crud::{remove_by_coerced_id, update_by_id, CrudService};
pub use ids::{coerce_query_id, strictly_equal};

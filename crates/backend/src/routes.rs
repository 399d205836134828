use axum::{routing::get, Router};
use contracts::system::frappe::{api_method_path, GET_DOCTYPE_METHOD, ROUTING_MAP_METHOD};

use crate::handlers::{self, AppState};

/// Frappe method routes served by the dev backend
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            &api_method_path(ROUTING_MAP_METHOD),
            get(handlers::routing::get_routing_map),
        )
        .route(
            &api_method_path(GET_DOCTYPE_METHOD),
            get(handlers::doctype::get_doctype),
        )
        .with_state(state)
}

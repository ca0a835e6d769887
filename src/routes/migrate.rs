//! Operational routes: migrations and the endpoint listing.

use crate::handlers::{list_endpoints, migrate};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn migration_routes(state: AppState) -> Router {
    Router::new()
        .route("/migrate", post(migrate))
        .route("/endpoints", get(list_endpoints))
        .with_state(state)
}

//! Configured query routes: one GET route per catalog entry, registered at startup.

use crate::handlers::run_endpoint;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use std::sync::Arc;

pub fn endpoint_routes(state: AppState) -> Router {
    let mut router = Router::new();
    for endpoint in state.catalog.endpoints() {
        tracing::info!(route = %endpoint.route, return_type = %endpoint.return_type, "registering endpoint");
        let endpoint = Arc::new(endpoint.clone());
        let route = endpoint.route.clone();
        router = router.route(
            &route,
            get(
                move |State(state): State<AppState>, Query(pairs): Query<Vec<(String, String)>>| {
                    let endpoint = Arc::clone(&endpoint);
                    async move { run_endpoint(&state, &endpoint, pairs.into_iter().collect()).await }
                },
            ),
        );
    }
    router.with_state(state)
}

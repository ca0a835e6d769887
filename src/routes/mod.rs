//! Router assembly.

pub mod common;
pub mod endpoints;
pub mod migrate;

pub use common::common_routes;
pub use endpoints::endpoint_routes;
pub use migrate::migration_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application router: operational routes plus every configured endpoint.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(migration_routes(state.clone()))
        .merge(endpoint_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
        )
}

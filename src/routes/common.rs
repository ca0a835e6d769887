//! Operational routes: liveness, readiness against the pool, build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

/// Readiness report. `endpoints` is the number of configured query routes.
#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
    endpoints: usize,
}

async fn live() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let database_ok = sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.pool)
        .await
        .is_ok();
    let endpoints = state.catalog.len();
    if database_ok {
        (StatusCode::OK, Json(Readiness { status: "ok", database: "ok", endpoints }))
    } else {
        tracing::warn!("readiness check: database unavailable");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Readiness { status: "degraded", database: "unavailable", endpoints }),
        )
    }
}

async fn build_info() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(readiness))
        .route("/version", get(build_info))
        .with_state(state)
}

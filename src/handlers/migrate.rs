//! Migration and catalog listing handlers.

use crate::config::CompiledEndpoint;
use crate::error::AppError;
use crate::migration::{apply_migrations, MigrationReport};
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn migrate(State(state): State<AppState>) -> Result<Json<MigrationReport>, AppError> {
    let report = apply_migrations(&state.pool, &state.migrations_path).await?;
    Ok(Json(report))
}

pub async fn list_endpoints(State(state): State<AppState>) -> Json<Vec<CompiledEndpoint>> {
    Json(state.catalog.endpoints().to_vec())
}

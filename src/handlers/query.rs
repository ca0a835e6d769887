//! Handler body shared by every configured endpoint: bind, execute, shape.

use crate::config::CompiledEndpoint;
use crate::error::AppError;
use crate::response::shape_rows;
use crate::service::{bind, QueryService, RawQuery};
use crate::state::AppState;
use axum::response::Response;

pub async fn run_endpoint(state: &AppState, endpoint: &CompiledEndpoint, raw: RawQuery) -> Result<Response, AppError> {
    let params = bind(&endpoint.parameters, &raw).map_err(|e| {
        tracing::debug!(route = %endpoint.route, error = %e, "parameter binding failed");
        e
    })?;
    let rows = QueryService::fetch_rows(&state.pool, &endpoint.sql, &params).await?;
    shape_rows(endpoint.return_type, rows)
}

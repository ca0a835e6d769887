//! Shared application state for all routes. The endpoint catalog is fixed at startup.

use crate::config::EndpointCatalog;
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub catalog: Arc<EndpointCatalog>,
    /// Directory scanned by `POST /migrate`.
    pub migrations_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(pool: SqlitePool, catalog: EndpointCatalog, migrations_path: impl Into<PathBuf>) -> Self {
        AppState {
            pool,
            catalog: Arc::new(catalog),
            migrations_path: Arc::new(migrations_path.into()),
        }
    }
}

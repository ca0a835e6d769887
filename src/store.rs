//! Database provisioning: open the SQLite pool, creating the file and its directory if needed.

use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const MAX_CONNECTIONS: u32 = 5;

/// Connect to `database_url` (e.g. `sqlite://data/app.db`).
pub async fn connect_pool(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| ConfigError::Settings(format!("invalid DATABASE_URL: {}", e)))?
        .create_if_missing(true);

    if let Some(parent) = opts.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(opts)
        .await?;
    tracing::info!(url = %database_url, "database pool ready");
    Ok(pool)
}

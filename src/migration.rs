//! One-shot schema migrations: run every `*.sql` file of a directory in file-name order.

use crate::error::AppError;
use serde::Serialize;
use sqlx::{Executor, SqlitePool};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub applied_migrations: Vec<String>,
}

impl MigrationReport {
    fn none() -> Self {
        MigrationReport {
            message: "No migration files found".to_string(),
            applied_migrations: Vec::new(),
        }
    }

    fn applied(names: Vec<String>) -> Self {
        MigrationReport {
            message: "Migrations applied successfully".to_string(),
            applied_migrations: names,
        }
    }
}

/// `.sql` files directly under `dir`, sorted by file name.
pub async fn migration_files(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let is_dir = tokio::fs::metadata(dir).await.map(|m| m.is_dir()).unwrap_or(false);
    if !is_dir {
        return Err(AppError::MigrationsNotFound(dir.display().to_string()));
    }

    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_sql = path.extension().map(|e| e == "sql").unwrap_or(false);
        if is_sql && entry.file_type().await?.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Execute each migration file on one connection, stopping at the first failure.
/// Files may hold several statements. Nothing records which files already ran.
pub async fn apply_migrations(pool: &SqlitePool, dir: &Path) -> Result<MigrationReport, AppError> {
    let files = migration_files(dir).await?;
    if files.is_empty() {
        tracing::info!(dir = %dir.display(), "no migration files found");
        return Ok(MigrationReport::none());
    }

    let mut conn = pool.acquire().await?;
    let mut applied = Vec::with_capacity(files.len());
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let sql = tokio::fs::read_to_string(&path).await?;
        Executor::execute(&mut *conn, sqlx::raw_sql(&sql)).await.map_err(|e| {
            tracing::error!(migration = %name, error = %e, "migration failed");
            AppError::Db(e)
        })?;
        tracing::info!(migration = %name, "applied migration");
        applied.push(name);
    }
    Ok(MigrationReport::applied(applied))
}

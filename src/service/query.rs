//! Execution of a compiled endpoint query against SQLite.

use crate::error::AppError;
use crate::service::ParsedParameters;
use crate::sql::{CompiledSql, SqliteBindValue};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Map, Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, SqlitePool, TypeInfo, ValueRef};

/// One result row: column name -> JSON scalar, in result-set column order.
pub type ResultRow = Map<String, Value>;

pub struct QueryService;

impl QueryService {
    /// Run `compiled` with `params` on one pooled connection. The connection goes back to
    /// the pool when this returns, whether the query succeeded or not.
    pub async fn fetch_rows(
        pool: &SqlitePool,
        compiled: &CompiledSql,
        params: &ParsedParameters,
    ) -> Result<Vec<ResultRow>, AppError> {
        let mut query = sqlx::query(&compiled.sql);
        for name in &compiled.names {
            let value = params.get(name).flatten().cloned();
            query = query.bind(SqliteBindValue(value));
        }

        let mut conn = pool.acquire().await?;
        let rows = query.fetch_all(&mut *conn).await?;
        tracing::debug!(rows = rows.len(), "query executed");
        rows.iter().map(row_to_json).collect()
    }
}

/// Convert a row to a JSON object; SQL NULL becomes `null`.
pub fn row_to_json(row: &SqliteRow) -> Result<ResultRow, AppError> {
    let mut obj = Map::with_capacity(row.len());
    for (idx, col) in row.columns().iter().enumerate() {
        obj.insert(col.name().to_string(), cell_to_value(row, idx)?);
    }
    Ok(obj)
}

/// Decode by the value's storage class rather than the declared column type.
fn cell_to_value(row: &SqliteRow, idx: usize) -> Result<Value, sqlx::Error> {
    let storage = {
        let raw = row.try_get_raw(idx)?;
        if raw.is_null() {
            return Ok(Value::Null);
        }
        raw.type_info().name().to_ascii_uppercase()
    };
    Ok(match storage.as_str() {
        "INTEGER" | "BOOLEAN" => Value::Number(row.try_get::<i64, _>(idx)?.into()),
        "REAL" | "NUMERIC" => {
            let f: f64 = row.try_get(idx)?;
            Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(f.to_string()))
        }
        "BLOB" => Value::String(STANDARD.encode(row.try_get::<Vec<u8>, _>(idx)?)),
        _ => Value::String(row.try_get::<String, _>(idx)?),
    })
}

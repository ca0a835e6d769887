//! Result shaping: one row as an object, or all rows as an array.

use crate::config::ReturnType;
use crate::error::AppError;
use crate::service::ResultRow;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// `Single` answers with the first row (404 when there is none); `Array` with every row in result order.
pub fn shape_rows(return_type: ReturnType, rows: Vec<ResultRow>) -> Result<Response, AppError> {
    match return_type {
        ReturnType::Single => {
            let first = rows.into_iter().next().ok_or(AppError::NotFound)?;
            Ok((StatusCode::OK, Json(first)).into_response())
        }
        ReturnType::Array => Ok((StatusCode::OK, Json(rows)).into_response()),
    }
}

//! Typed errors and HTTP mapping.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Generic body for 500 responses. The cause is logged, never returned.
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while executing the query";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config load: {0}")]
    Load(String),
    #[error("config parse: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("endpoint '{route}': {message}")]
    Endpoint { route: String, message: String },
    #[error("duplicate route: {0}")]
    DuplicateRoute(String),
    #[error("settings: {0}")]
    Settings(String),
}

/// Failure to turn raw query-string values into typed parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("Required parameter '{name}' is missing")]
    MissingRequiredParameter { name: String },
    #[error("Parameter '{name}' has invalid format for type '{declared_type}'")]
    InvalidParameterFormat { name: String, declared_type: String },
    /// The configuration declares a type we cannot coerce to.
    #[error("Unsupported parameter type: {declared_type}")]
    UnsupportedType { declared_type: String },
}

impl BindError {
    /// True when the caller sent bad input, false for configuration defects.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, BindError::UnsupportedType { .. })
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Bind(#[from] BindError),
    #[error("not found")]
    NotFound,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("migrations directory not found: {0}")]
    MigrationsNotFound(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

fn plain(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            AppError::Bind(e) if e.is_client_error() => plain(StatusCode::BAD_REQUEST, e.to_string()),
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::MigrationsNotFound(_) => {
                let body = ErrorBody {
                    error: ErrorDetail {
                        code: "migrations_not_found".to_string(),
                        message,
                    },
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                plain(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_string())
            }
        }
    }
}

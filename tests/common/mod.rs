#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use query_endpoints::{app, connect_pool, load_from_path, parse_config, resolve, AppState, EndpointCatalog};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tower::ServiceExt;

pub fn server_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("server")
}

/// App over a fresh SQLite file. Keep the TempDir alive for the test's duration.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub dir: TempDir,
}

pub async fn build_app(catalog: EndpointCatalog, migrations: &Path) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("test.db").display());
    let pool = connect_pool(&url).await.unwrap();
    let state = AppState::new(pool, catalog, migrations);
    TestApp {
        router: app(state.clone()),
        state,
        dir,
    }
}

/// The sample server configuration and migrations.
pub async fn sample_app() -> TestApp {
    let config = load_from_path(&server_dir().join("database-endpoints.json")).await.unwrap();
    let catalog = resolve(&config, true).unwrap();
    build_app(catalog, &server_dir().join("migrations")).await
}

pub async fn app_from_json(json: &str, strict: bool, migrations: &Path) -> TestApp {
    let catalog = resolve(&parse_config(json).unwrap(), strict).unwrap();
    build_app(catalog, migrations).await
}

pub async fn send(app: &TestApp, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let resp = app
        .router
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

pub async fn get(app: &TestApp, uri: &str) -> (StatusCode, Vec<u8>) {
    send(app, Method::GET, uri).await
}

pub async fn migrate(app: &TestApp) -> (StatusCode, Vec<u8>) {
    send(app, Method::POST, "/migrate").await
}

pub fn json(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}

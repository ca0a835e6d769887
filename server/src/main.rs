//! Server: loads the endpoints document, opens the SQLite database and serves the configured routes.
//!
//! Run from repo root: `cargo run -p query-endpoints-server`
//! Settings come from the environment or a `.env` file (see `Settings`).

use query_endpoints::{app, connect_pool, load_from_path, resolve, AppState, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("query_endpoints=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = connect_pool(&settings.database_url).await?;

    let config = load_from_path(&settings.endpoints_config_path).await?;
    let catalog = resolve(&config, settings.strict_config)?;
    tracing::info!(
        endpoints = catalog.len(),
        path = %settings.endpoints_config_path.display(),
        "endpoint catalog loaded"
    );

    let state = AppState::new(pool, catalog, settings.migrations_path.clone());
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}

//! Query endpoints: HTTP routes whose SQL, parameters and result shape come from configuration.

pub mod case;
pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{load_from_path, parse_config, resolve, CompiledEndpoint, EndpointCatalog, EndpointsConfig, Settings};
pub use error::{AppError, BindError, ConfigError};
pub use migration::{apply_migrations, MigrationReport};
pub use response::shape_rows;
pub use routes::{app, common_routes, endpoint_routes, migration_routes};
pub use service::{bind, coerce, ParsedParameters, QueryService, RawQuery};
pub use state::AppState;
pub use store::connect_pool;

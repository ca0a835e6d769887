//! Process settings from the environment (`.env` is honoured by the server binary).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub endpoints_config_path: PathBuf,
    pub migrations_path: PathBuf,
    pub bind_addr: SocketAddr,
    /// Reject unsupported parameter types and non-GET methods at startup.
    pub strict_config: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; missing keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://data/app.db".into());
        let endpoints_config_path =
            PathBuf::from(lookup("ENDPOINTS_CONFIG_PATH").unwrap_or_else(|| "database-endpoints.json".into()));
        let migrations_path = PathBuf::from(lookup("MIGRATIONS_PATH").unwrap_or_else(|| "migrations".into()));
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".into())
            .parse()
            .map_err(|e| ConfigError::Settings(format!("invalid BIND_ADDR: {}", e)))?;
        let strict_config = match lookup("STRICT_CONFIG") {
            None => true,
            Some(v) => parse_bool(&v)
                .ok_or_else(|| ConfigError::Settings(format!("invalid STRICT_CONFIG: {}", v)))?,
        };
        Ok(Settings {
            database_url,
            endpoints_config_path,
            migrations_path,
            bind_addr,
            strict_config,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

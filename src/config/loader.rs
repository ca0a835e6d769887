//! Load the endpoints document from a JSON file or string.

use crate::case::fold_config_keys;
use crate::config::types::EndpointsConfig;
use crate::error::ConfigError;
use serde_json::Value;
use std::path::Path;

/// Parse an endpoints document. Field names match case-insensitively.
pub fn parse_config(json: &str) -> Result<EndpointsConfig, ConfigError> {
    let mut doc: Value = serde_json::from_str(json)?;
    fold_config_keys(&mut doc);
    match doc.get("endpoints") {
        Some(Value::Array(_)) => {}
        _ => return Err(ConfigError::Load("Invalid configuration format: 'endpoints' array is required".into())),
    }
    Ok(serde_json::from_value(doc)?)
}

/// Read and parse the endpoints file at `path`.
pub async fn load_from_path(path: &Path) -> Result<EndpointsConfig, ConfigError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Load(format!("Configuration file not found: {}: {}", path.display(), e)))?;
    parse_config(&json)
}

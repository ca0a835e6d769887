//! Endpoint catalog: validated definitions with compiled SQL, built once at startup.

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use crate::sql::{compile_named, CompiledSql};
use serde::Serialize;
use std::collections::BTreeMap;

/// One routable endpoint.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledEndpoint {
    pub route: String,
    pub method: String,
    pub parameters: BTreeMap<String, ParameterSpec>,
    pub return_type: ReturnType,
    #[serde(skip)]
    pub sql: CompiledSql,
}

/// Read-only set of endpoints served by the process.
#[derive(Clone, Debug, Default)]
pub struct EndpointCatalog {
    endpoints: Vec<CompiledEndpoint>,
}

impl EndpointCatalog {
    pub fn endpoints(&self) -> &[CompiledEndpoint] {
        &self.endpoints
    }

    pub fn by_route(&self, route: &str) -> Option<&CompiledEndpoint> {
        self.endpoints.iter().find(|e| e.route == route)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

fn compile_endpoint(def: &EndpointDefinition) -> Result<CompiledEndpoint, ConfigError> {
    let sql = compile_named(&def.query);
    if let Some(undeclared) = sql.names.iter().find(|n| !def.parameters.contains_key(n.as_str())) {
        return Err(ConfigError::Endpoint {
            route: def.route.clone(),
            message: format!("query uses undeclared parameter '${}'", undeclared),
        });
    }
    Ok(CompiledEndpoint {
        route: def.route.clone(),
        method: "GET".to_string(),
        parameters: def.parameters.clone(),
        return_type: def.return_type,
        sql,
    })
}

/// Validate `config` and compile its GET endpoints, in document order.
/// Definitions with other methods are skipped (only reachable when not `strict`).
pub fn resolve(config: &EndpointsConfig, strict: bool) -> Result<EndpointCatalog, ConfigError> {
    validate(config, strict)?;
    let mut endpoints = Vec::with_capacity(config.endpoints.len());
    for def in &config.endpoints {
        if !def.is_get() {
            tracing::warn!(route = %def.route, method = %def.method, "skipping endpoint with unsupported method");
            continue;
        }
        endpoints.push(compile_endpoint(def)?);
    }
    Ok(EndpointCatalog { endpoints })
}

//! Validate the endpoints document before building the catalog.

use crate::config::types::*;
use crate::error::ConfigError;
use regex::Regex;
use std::collections::HashSet;

/// Paths served by the process itself; config may not claim them.
pub const RESERVED_ROUTES: &[&str] = &["/health", "/ready", "/version", "/endpoints", "/migrate"];

fn endpoint_error(def: &EndpointDefinition, message: impl Into<String>) -> ConfigError {
    ConfigError::Endpoint {
        route: def.route.clone(),
        message: message.into(),
    }
}

/// Checks that apply in every mode: the router could not represent these definitions.
fn validate_shape(config: &EndpointsConfig) -> Result<(), ConfigError> {
    let mut seen_routes: HashSet<&str> = HashSet::new();
    for def in &config.endpoints {
        if !def.route.starts_with('/') {
            return Err(endpoint_error(def, "route must start with '/'"));
        }
        if def.route.split('/').any(|seg| seg.starts_with(':') || seg.starts_with('*')) {
            return Err(endpoint_error(def, "route segments must be literal"));
        }
        if def.is_get() && RESERVED_ROUTES.contains(&def.route.as_str()) {
            return Err(endpoint_error(def, "route is reserved"));
        }
        if def.query.trim().is_empty() {
            return Err(endpoint_error(def, "query must not be empty"));
        }
        if def.is_get() && !seen_routes.insert(def.route.as_str()) {
            return Err(ConfigError::DuplicateRoute(def.route.clone()));
        }
    }
    Ok(())
}

/// Fail-fast checks for strict mode: every method is GET, every type is supported,
/// every parameter name is an identifier.
fn validate_strict(config: &EndpointsConfig) -> Result<(), ConfigError> {
    let ident = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").map_err(|e| ConfigError::Load(e.to_string()))?;
    for def in &config.endpoints {
        if !def.is_get() {
            return Err(endpoint_error(def, format!("unsupported method '{}'", def.method)));
        }
        for (name, spec) in &def.parameters {
            if !ident.is_match(name) {
                return Err(endpoint_error(def, format!("parameter name '{}' is not an identifier", name)));
            }
            if spec.type_.parse::<ParamType>().is_err() {
                return Err(endpoint_error(
                    def,
                    format!("parameter '{}' has unsupported type '{}'", name, spec.type_),
                ));
            }
        }
    }
    Ok(())
}

/// Validate `config`. With `strict`, configuration defects that would otherwise surface
/// per request (unsupported types) or be skipped (non-GET methods) are rejected here.
pub fn validate(config: &EndpointsConfig, strict: bool) -> Result<(), ConfigError> {
    validate_shape(config)?;
    if strict {
        validate_strict(config)?;
    }
    Ok(())
}

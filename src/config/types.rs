//! Raw config types matching the endpoints JSON document.
//! Field names arrive folded to lowercase (see `case::fold_config_keys`).

use crate::error::BindError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Top-level document: `{ "endpoints": [ ... ] }`.
#[derive(Clone, Debug, Deserialize)]
pub struct EndpointsConfig {
    pub endpoints: Vec<EndpointDefinition>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EndpointDefinition {
    pub route: String,
    /// HTTP verb as written in config; compared case-insensitively.
    pub method: String,
    /// SQL text with `$name` placeholders.
    pub query: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parameters: BTreeMap<String, ParameterSpec>,
    #[serde(rename = "returntype")]
    pub return_type: ReturnType,
}

impl EndpointDefinition {
    pub fn is_get(&self) -> bool {
        self.method.eq_ignore_ascii_case("GET")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Declared type as written in config (`int`, `decimal`, `string`).
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub optional: bool,
}

impl ParameterSpec {
    pub fn required(type_: &str) -> Self {
        ParameterSpec { type_: type_.to_string(), optional: false }
    }

    pub fn optional(type_: &str) -> Self {
        ParameterSpec { type_: type_.to_string(), optional: true }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, ParameterSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, ParameterSpec>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Primitive types a parameter may be declared as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamType {
    Int,
    Decimal,
    String,
}

impl FromStr for ParamType {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" => Ok(ParamType::Int),
            "decimal" => Ok(ParamType::Decimal),
            "string" => Ok(ParamType::String),
            _ => Err(BindError::UnsupportedType { declared_type: s.to_string() }),
        }
    }
}

/// Result cardinality of an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReturnType {
    Single,
    Array,
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnType::Single => f.write_str("Single"),
            ReturnType::Array => f.write_str("Array"),
        }
    }
}

impl FromStr for ReturnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("single") {
            Ok(ReturnType::Single)
        } else if s.eq_ignore_ascii_case("array") {
            Ok(ReturnType::Array)
        } else {
            Err(format!("returnType must be Single or Array; got '{}'", s))
        }
    }
}

impl Serialize for ReturnType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReturnType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_type_is_case_insensitive() {
        assert_eq!("INT".parse::<ParamType>(), Ok(ParamType::Int));
        assert_eq!("Decimal".parse::<ParamType>(), Ok(ParamType::Decimal));
        assert_eq!("string".parse::<ParamType>(), Ok(ParamType::String));
    }

    #[test]
    fn unknown_param_type_keeps_declared_spelling() {
        let err = "Uuid".parse::<ParamType>().unwrap_err();
        assert_eq!(err, BindError::UnsupportedType { declared_type: "Uuid".into() });
    }

    #[test]
    fn return_type_round_trips_through_json() {
        let rt: ReturnType = serde_json::from_str("\"sINGLE\"").unwrap();
        assert_eq!(rt, ReturnType::Single);
        assert_eq!(serde_json::to_string(&ReturnType::Array).unwrap(), "\"Array\"");
        assert!(serde_json::from_str::<ReturnType>("\"Many\"").is_err());
    }
}

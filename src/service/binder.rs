//! Request parameter binding: validate and coerce query-string values against declared specs.

use crate::config::ParameterSpec;
use crate::error::BindError;
use crate::service::coerce;
use crate::sql::TypedValue;
use std::collections::{BTreeMap, HashMap};

/// Query-string values grouped by name, in arrival order.
#[derive(Clone, Debug, Default)]
pub struct RawQuery {
    values: HashMap<String, Vec<String>>,
}

impl RawQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.entry(name.into()).or_default().push(value.into());
    }

    /// First value sent for `name`; later repeats are ignored.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.first()).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawQuery {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut q = RawQuery::new();
        for (k, v) in iter {
            q.push(k, v);
        }
        q
    }
}

/// Bound values keyed by parameter name. Exactly one entry per declared parameter;
/// `None` marks an absent optional parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedParameters {
    values: BTreeMap<String, Option<TypedValue>>,
}

impl ParsedParameters {
    /// Outer `None`: not declared. Inner `None`: declared but absent.
    pub fn get(&self, name: &str) -> Option<Option<&TypedValue>> {
        self.values.get(name).map(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&TypedValue>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }
}

/// Bind `raw` against `specs`. Stops at the first failure and returns no partial result.
/// An empty string counts as not provided.
pub fn bind(specs: &BTreeMap<String, ParameterSpec>, raw: &RawQuery) -> Result<ParsedParameters, BindError> {
    let mut values = BTreeMap::new();
    for (name, spec) in specs {
        let value = match raw.first(name).filter(|v| !v.is_empty()) {
            None if spec.optional => None,
            None => return Err(BindError::MissingRequiredParameter { name: name.clone() }),
            Some(v) => Some(coerce(name, v, &spec.type_)?),
        };
        values.insert(name.clone(), value);
    }
    Ok(ParsedParameters { values })
}

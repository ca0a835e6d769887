//! Case folding for config documents: field names match case-insensitively, parameter names keep their case.

use serde_json::{Map, Value};

/// Fold all keys of a JSON object to lowercase (in place), keeping key order.
/// When two keys fold to the same name, the one appearing last wins.
pub fn object_keys_to_lowercase(obj: &mut Map<String, Value>) {
    let folded: Map<String, Value> = std::mem::take(obj)
        .into_iter()
        .map(|(k, v)| (k.to_lowercase(), v))
        .collect();
    *obj = folded;
}

/// Apply lowercase folding to a Value. If it's an object, folds its keys; otherwise no-op.
pub fn value_keys_to_lowercase(value: &mut Value) {
    if let Value::Object(ref mut map) = value {
        object_keys_to_lowercase(map);
    }
}

/// Fold the structural field names of an endpoints document:
/// the top-level object, each endpoint object and each parameter spec object.
/// Keys of `parameters` are parameter names and are left untouched.
pub fn fold_config_keys(doc: &mut Value) {
    value_keys_to_lowercase(doc);
    let Some(Value::Array(endpoints)) = doc.get_mut("endpoints") else {
        return;
    };
    for endpoint in endpoints.iter_mut() {
        value_keys_to_lowercase(endpoint);
        if let Some(Value::Object(params)) = endpoint.get_mut("parameters") {
            for (_, spec) in params.iter_mut() {
                value_keys_to_lowercase(spec);
            }
        }
    }
}

//! Ingestion of parsed JSON into the browsable model.
//!
//! Conversion happens once at the boundary; afterwards the tree shares
//! the converted graph by reference only.

use serde_json::Value;

use crate::reflect::ObjRef;
use crate::value::{Dict, List, Scalar};

/// Converts a parsed JSON document into a browsable value graph.
pub fn from_json(value: &Value) -> ObjRef {
    match value {
        Value::Null => Scalar::null(),
        Value::Bool(v) => Scalar::bool(*v),
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                Scalar::int(v)
            } else {
                Scalar::float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(v) => Scalar::str(v.clone()),
        Value::Array(items) => List::new(items.iter().map(from_json).collect()),
        Value::Object(map) => {
            let dict = Dict::new();
            for (key, item) in map {
                dict.insert(key.clone(), from_json(item));
            }
            dict
        }
    }
}

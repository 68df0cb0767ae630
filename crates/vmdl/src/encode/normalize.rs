use serde_json::Value as JsonValue;

use crate::{
    Error, Result,
    value::{Map, Value},
};

// Normalization of arbitrary JSON into the string-only tree.
// - Strings are kept verbatim; objects become sections.
// - Everything else is a leaf holding its compact JSON text, so `null` is the
//   leaf "null" and never a section, and arrays get no list syntax.
pub fn from_json(v: &JsonValue) -> Result<Map> {
    match v {
        JsonValue::Object(obj) => Ok(normalize_object(obj)),
        other => Err(Error::Message(format!(
            "top-level value must be an object, got {}",
            kind_name(other)
        ))),
    }
}

pub fn normalize_value(v: &JsonValue) -> Value {
    match v {
        JsonValue::String(s) => Value::Leaf(s.clone()),
        JsonValue::Object(obj) => Value::Section(normalize_object(obj)),
        JsonValue::Null | JsonValue::Bool(_) | JsonValue::Number(_) | JsonValue::Array(_) => {
            Value::Leaf(v.to_string())
        }
    }
}

fn normalize_object(obj: &serde_json::Map<String, JsonValue>) -> Map {
    obj.iter()
        .map(|(k, vv)| (k.clone(), normalize_value(vv)))
        .collect()
}

fn kind_name(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

//! Loose readers for the host-supplied options bag.
//!
//! Host bridges hand options over as untyped JSON-ish values whose types
//! depend on the caller's language. Each reader accepts the native type or
//! its string form and returns `None` on anything else; the config layer
//! turns `None` into the documented default instead of an error.

use serde_json::{Map, Value};

/// String form of a scalar value: strings as-is, bools and numbers
/// stringified. Arrays, objects, and null read as `None`.
pub fn get_str(options: &Map<String, Value>, key: &str) -> Option<String> {
    match options.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn get_bool(options: &Map<String, Value>, key: &str) -> Option<bool> {
    match options.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s == "true" => Some(true),
        Value::String(s) if s == "false" => Some(false),
        _ => None,
    }
}

pub fn get_f64(options: &Map<String, Value>, key: &str) -> Option<f64> {
    match options.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

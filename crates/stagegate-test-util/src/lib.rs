//! Shared test utilities for the stagegate workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` at
//! runtime (not behind `#[cfg(test)]`), so a `#[cfg(test)]` module inside
//! `stagegate-types` would not suffice.

use serde_json::Value;

pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
pub const VERSION_PLACEHOLDER: &str = "__VERSION__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// Two concerns are handled separately:
///
/// 1. **Root-only**: `tool.version` is replaced with `"__VERSION__"` only
///    when the *root* object looks like a report document (has all four keys:
///    `schema`, `tool`, `summary`, `results`). Check `details` are free-form,
///    so a nested object of the same shape is left alone.
///
/// 2. **Recursive**: `timestamp` keys and `duration_ms` are normalized at
///    any depth because their placeholder values are fixed.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_document = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("summary")
            && obj.contains_key("results");
        if is_document
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String(VERSION_PLACEHOLDER.to_string()),
            );
        }
    }
    normalize_recursive(&mut value);
    value
}

fn normalize_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.contains_key("timestamp") {
                map.insert(
                    "timestamp".to_string(),
                    Value::String(TIMESTAMP_PLACEHOLDER.to_string()),
                );
            }
            if map.contains_key("duration_ms") {
                map.insert("duration_ms".to_string(), Value::Number(0.into()));
            }
            for val in map.values_mut() {
                normalize_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_recursive(val);
            }
        }
        _ => {}
    }
}

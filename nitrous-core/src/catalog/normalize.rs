//! Payload normalization
//!
//! Remote payloads have no guaranteed shape. Each catalog endpoint has exactly
//! one function here that turns whatever arrived into the declared Rust type;
//! nothing downstream re-checks shapes.

use serde_json::Value;

use super::OsintModule;
use crate::error::CatalogError;

/// Coerce a "modules by category" payload into module names
///
/// Anything that is not an array (missing body, `null`, scalars, objects)
/// becomes an empty list. Array elements that are not strings are dropped.
/// Never fails.
pub fn normalize_module_names(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => {
            let total = items.len();
            let names: Vec<String> = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(name) => Some(name),
                    _ => None,
                })
                .collect();

            if names.len() != total {
                tracing::debug!(
                    "Dropped {} non-string module entries",
                    total - names.len()
                );
            }
            names
        }
        other => {
            tracing::debug!(
                "Module list payload is not an array ({}); using empty list",
                value_kind(&other)
            );
            Vec::new()
        }
    }
}

/// Parse the category list, which must be an array of strings
pub fn normalize_categories(value: Value, source_name: &str) -> Result<Vec<String>, CatalogError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(CatalogError::Malformed {
                source_name: source_name.to_string(),
                reason: format!("expected an array of categories, got {}", value_kind(&other)),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(name) => Ok(name),
            other => Err(CatalogError::Malformed {
                source_name: source_name.to_string(),
                reason: format!("category at index {i} is {}, not a string", value_kind(&other)),
            }),
        })
        .collect()
}

/// Parse the module index
///
/// Accepts a bare array or an object envelope with a `data` array.
pub fn normalize_modules(value: Value, source_name: &str) -> Result<Vec<OsintModule>, CatalogError> {
    let payload = match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };

    serde_json::from_value(payload).map_err(|e| CatalogError::Malformed {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

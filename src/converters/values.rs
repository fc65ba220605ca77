//! Sample value resolution for parameters and body fields

use crate::models::openapi::SchemaNode;
use serde_json::Value;

/// Value emitted for a parameter with nothing to sample from
pub const PARAMETER_FALLBACK: &str = "value";

/// How a resolved value will be spliced into the script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMode {
    /// Raw text for path and query substitution
    Raw,
    /// A JSON literal for a request body field
    JsonLiteral,
}

/// Pick a concrete sample value: `example`, then `default`, then the first
/// `enum` member, then a fallback that depends on the mode.
pub fn resolve_value(node: &SchemaNode, mode: ValueMode) -> String {
    match (node.declared_value(), mode) {
        (Some(value), ValueMode::Raw) => raw_text(value),
        (Some(value), ValueMode::JsonLiteral) => value.to_string(),
        (None, ValueMode::Raw) => PARAMETER_FALLBACK.to_string(),
        (None, ValueMode::JsonLiteral) => type_fallback(node.schema_type.as_deref()).to_string(),
    }
}

/// Strings as-is, everything else as its compact JSON text
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn type_fallback(schema_type: Option<&str>) -> &'static str {
    match schema_type {
        Some("integer") => "123",
        Some("boolean") => "true",
        _ => "\"sample\"",
    }
}

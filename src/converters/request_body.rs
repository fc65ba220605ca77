//! Sample request body synthesis

use super::values::{ValueMode, resolve_value};
use crate::models::openapi::{RequestBodyDefinition, SpecDocument};

/// Build a flat JSON object literal for a request body.
///
/// Only the `application/json` schema is used, with at most one `$ref` hop
/// into `components.schemas`. Nested objects and arrays are not expanded;
/// each property gets a single scalar-shaped value.
pub fn build_body_json(body: &RequestBodyDefinition, spec: &SpecDocument) -> String {
    let Some(schema) = body
        .json_schema
        .as_ref()
        .and_then(|schema| spec.resolve_schema(schema))
    else {
        return "{}".to_string();
    };

    let fields: Vec<String> = schema
        .properties
        .iter()
        .map(|(name, property)| {
            format!(
                "{}: {}",
                serde_json::Value::from(name.as_str()),
                resolve_value(property, ValueMode::JsonLiteral)
            )
        })
        .collect();

    format!("{{{}}}", fields.join(", "))
}

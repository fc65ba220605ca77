use crate::error::{K6GenError, Result};
use crate::models::openapi::SpecDocument;
use std::fs;
use std::path::Path;

/// Load an OpenAPI document from a JSON or YAML file
pub fn load_openapi<P: AsRef<Path>>(path: P) -> Result<SpecDocument> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        K6GenError::SpecFetchError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    parse_openapi(&content)
}

/// Parse OpenAPI text into the document model.
///
/// JSON is detected by a leading `{`; anything else is parsed as YAML.
/// Syntax errors abort, but structural gaps do not.
pub fn parse_openapi(content: &str) -> Result<SpecDocument> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Err(K6GenError::SpecParseError("document is empty".to_string()));
    }

    let root: serde_json::Value = if trimmed.starts_with('{') {
        serde_json::from_str(trimmed)?
    } else {
        serde_yaml::from_str(trimmed)?
    };

    let spec = SpecDocument::from_value(&root);
    tracing::info!(
        operations = spec.operations.len(),
        schemas = spec.schemas.len(),
        "Parsed OpenAPI document"
    );
    Ok(spec)
}

//! Rendering of one operation into a self-contained k6 test block

use super::js::escape_template;
use super::request_body::build_body_json;
use super::values::{ValueMode, resolve_value};
use crate::models::openapi::{OperationDefinition, ParameterLocation, SpecDocument};
use indexmap::IndexSet;
use regex::Regex;
use std::sync::LazyLock;

/// Path placeholder bound to the script-level `COMPANY` constant
pub const COMPANY_PLACEHOLDER: &str = "{company}";

/// Status expected when `responses` declares no numeric code
pub const DEFAULT_STATUS: u16 = 200;

/// Response time budget asserted for every request
pub const MAX_RESPONSE_MS: u32 = 500;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("valid identifier pattern"));

/// Rendered test block for one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    /// `METHOD_sanitizedPath`
    pub identifier: String,
    /// Script text, one statement per line, without leading indentation
    pub text: String,
}

/// `METHOD_path` with every non-alphanumeric path character replaced by `_`.
///
/// Distinct paths can collide (`/a-b` and `/a_b`); this is accepted.
pub fn sanitize_identifier(method: &str, path: &str) -> String {
    format!(
        "{}_{}",
        method.to_uppercase(),
        NON_ALPHANUMERIC.replace_all(path, "_")
    )
}

/// Numeric `responses` keys, deduplicated in declared order; `[200]` if none
pub fn expected_status_codes(operation: &OperationDefinition) -> Vec<u16> {
    let codes: IndexSet<u16> = operation
        .responses
        .iter()
        .filter(|code| !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|code| code.parse().ok())
        .collect();

    if codes.is_empty() {
        vec![DEFAULT_STATUS]
    } else {
        codes.into_iter().collect()
    }
}

/// Resolve the path template and query string for an operation.
///
/// The returned text is already escaped for a template literal and may
/// contain the `${COMPANY}` interpolation.
pub fn resolve_url(operation: &OperationDefinition) -> String {
    // Parameters are substituted per segment around `{company}`, so the
    // inserted `${COMPANY}` is never matched by a parameter placeholder.
    let mut segments: Vec<String> = escape_template(&operation.path)
        .split(COMPANY_PLACEHOLDER)
        .map(str::to_string)
        .collect();
    let mut query = Vec::new();

    for param in &operation.parameters {
        let Some(name) = param.name.as_deref() else {
            continue;
        };
        let value = escape_template(&resolve_value(&param.sample, ValueMode::Raw));

        match param.location {
            ParameterLocation::Path => {
                let placeholder = format!("{{{}}}", name);
                for segment in &mut segments {
                    *segment = segment.replace(&placeholder, &value);
                }
            }
            ParameterLocation::Query => {
                query.push(format!("{}={}", escape_template(name), value));
            }
            ParameterLocation::Other(_) => {}
        }
    }

    let path = segments.join("${COMPANY}");
    if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

/// Render one operation: optional body, request, status log, checks, pause.
pub fn render_operation(operation: &OperationDefinition, spec: &SpecDocument) -> RenderedBlock {
    let identifier = sanitize_identifier(&operation.method, &operation.path);
    let method = operation.method.to_uppercase();
    let url = resolve_url(operation);
    let response_var = format!("response_{}", identifier);

    let mut lines = Vec::new();
    lines.push(format!("// Endpoint: {}", single_line(&operation.path)));
    lines.push(format!("// Method: {}", method));

    let body_var = operation.request_body.as_ref().map(|body| {
        let var = format!("body_{}", identifier);
        lines.push(format!(
            "let {} = JSON.stringify({});",
            var,
            build_body_json(body, spec)
        ));
        var
    });
    let body_arg = body_var.as_deref().filter(|_| sends_body(&method));

    lines.push(http_call(&method, &response_var, &url, body_arg));
    lines.push(format!(
        "console.log(`[STATUS][status is ${{{r}.status}}][var={r}][method={m}] ${{{r}.request.method}} ${{{r}.request.url}} - got ${{{r}.status}}`);",
        r = response_var,
        m = method
    ));
    lines.extend(status_checks(
        &method,
        &url,
        &response_var,
        &expected_status_codes(operation),
    ));
    lines.push("sleep(1);".to_string());

    tracing::debug!(identifier = %identifier, url = %url, "Rendered operation");

    RenderedBlock {
        identifier,
        text: lines.join("\n"),
    }
}

/// GET and HEAD never carry the synthesized body
fn sends_body(method: &str) -> bool {
    !matches!(method, "GET" | "HEAD")
}

fn http_call(method: &str, response_var: &str, url: &str, body: Option<&str>) -> String {
    let target = format!("`${{BASE_URL}}{}`", url);
    let params = "{ headers: HEADERS }";
    let body = body.unwrap_or("null");

    match method {
        "GET" => format!("let {} = http.get({}, {});", response_var, target, params),
        "HEAD" => format!("let {} = http.head({}, {});", response_var, target, params),
        "DELETE" => format!(
            "let {} = http.del({}, {}, {});",
            response_var, target, body, params
        ),
        "POST" | "PUT" | "PATCH" | "OPTIONS" => format!(
            "let {} = http.{}({}, {}, {});",
            response_var,
            method.to_lowercase(),
            target,
            body,
            params
        ),
        other => format!(
            "let {} = http.request('{}', {}, {}, {});",
            response_var, other, target, body, params
        ),
    }
}

fn status_checks(method: &str, url: &str, response_var: &str, codes: &[u16]) -> Vec<String> {
    let allowed = format!(
        "[{}]",
        codes
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    vec![
        format!("check({}, {{", response_var),
        format!(
            "  [`[{}] {} status in {}`]: (r) => {}.includes(r.status),",
            method, url, allowed, allowed
        ),
        "  'response has body': (r) => !!r.body && r.body.length > 0,".to_string(),
        "  'content-type is JSON': (r) => (r.headers['Content-Type'] || '').includes('application/json'),"
            .to_string(),
        format!(
            "  'response < {}ms': (r) => r.timings.duration < {},",
            MAX_RESPONSE_MS, MAX_RESPONSE_MS
        ),
        "});".to_string(),
    ]
}

fn single_line(s: &str) -> String {
    s.replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::openapi::{Node, ParameterDefinition, RequestBodyDefinition};
    use serde_json::json;

    fn param(value: serde_json::Value) -> ParameterDefinition {
        ParameterDefinition::from_node(Node::new(&value))
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("get", "/items/{id}"), "GET__items__id_");
        assert_eq!(sanitize_identifier("post", "/a-b.c"), "POST__a_b_c");
        assert_eq!(
            sanitize_identifier("get", "/a-b"),
            sanitize_identifier("get", "/a_b")
        );
    }

    #[test]
    fn test_expected_status_codes() {
        let mut op = OperationDefinition::new("/a", "get");
        assert_eq!(expected_status_codes(&op), vec![200]);

        op.responses = vec!["default".into(), "2XX".into()];
        assert_eq!(expected_status_codes(&op), vec![200]);

        op.responses = vec!["201".into(), "default".into(), "404".into(), "201".into()];
        assert_eq!(expected_status_codes(&op), vec![201, 404]);
    }

    #[test]
    fn test_path_parameter_substitution() {
        let mut op = OperationDefinition::new("/items/{id}/copy/{id}", "get");
        op.parameters = vec![param(json!({ "name": "id", "in": "path", "example": "42" }))];
        assert_eq!(resolve_url(&op), "/items/42/copy/42");
    }

    #[test]
    fn test_path_parameter_priority_and_fallback() {
        let mut op = OperationDefinition::new("/{a}/{b}/{c}/{d}", "get");
        op.parameters = vec![
            param(json!({ "name": "a", "in": "path", "default": "def", "enum": ["e"] })),
            param(json!({ "name": "b", "in": "path", "enum": [7, 8] })),
            param(json!({ "name": "c", "in": "path" })),
            param(json!({ "name": "d", "in": "path", "example": 1.5, "default": 2 })),
        ];
        assert_eq!(resolve_url(&op), "/def/7/value/1.5");
    }

    #[test]
    fn test_query_parameters_and_skipped_ones() {
        let mut op = OperationDefinition::new("/search", "get");
        op.parameters = vec![
            param(json!({ "name": "q", "in": "query", "example": "cats" })),
            param(json!({ "in": "query", "example": "orphan" })),
            param(json!({ "name": "X-Trace", "in": "header", "example": "t" })),
            param(json!({ "name": "page", "in": "query", "default": 2 })),
        ];
        assert_eq!(resolve_url(&op), "/search?q=cats&page=2");
    }

    #[test]
    fn test_company_placeholder() {
        let mut op = OperationDefinition::new("/companies/{company}/users", "get");
        op.parameters = vec![param(json!({ "name": "company", "in": "path", "example": "acme" }))];
        assert_eq!(resolve_url(&op), "/companies/${COMPANY}/users");
    }

    #[test]
    fn test_company_interpolation_survives_uppercase_parameter() {
        let mut op = OperationDefinition::new("/c/{company}/{COMPANY}", "get");
        op.parameters = vec![param(json!({ "name": "COMPANY", "in": "path", "example": "X" }))];
        assert_eq!(resolve_url(&op), "/c/${COMPANY}/X");
    }

    #[test]
    fn test_values_cannot_break_template_literal() {
        let mut op = OperationDefinition::new("/x/{id}", "get");
        op.parameters = vec![param(json!({ "name": "id", "in": "path", "example": "`${evil}`" }))];
        assert_eq!(resolve_url(&op), "/x/\\`\\${evil}\\`");
    }

    #[test]
    fn test_render_get_block() {
        let mut op = OperationDefinition::new("/pets", "get");
        op.responses = vec!["200".into()];
        let block = render_operation(&op, &SpecDocument::default());

        assert_eq!(block.identifier, "GET__pets");
        assert!(block.text.starts_with("// Endpoint: /pets\n// Method: GET\n"));
        assert!(block.text.contains(
            "let response_GET__pets = http.get(`${BASE_URL}/pets`, { headers: HEADERS });"
        ));
        assert!(block.text.contains("[`[GET] /pets status in [200]`]: (r) => [200].includes(r.status),"));
        assert!(block.text.contains("[var=response_GET__pets]"));
        assert!(block.text.contains("'response has body'"));
        assert!(block.text.contains("'content-type is JSON'"));
        assert!(block.text.contains("'response < 500ms': (r) => r.timings.duration < 500,"));
        assert!(block.text.ends_with("sleep(1);"));
        assert!(!block.text.contains("body_"));
    }

    #[test]
    fn test_render_post_with_body() {
        let mut op = OperationDefinition::new("/pets", "post");
        op.request_body = Some(RequestBodyDefinition::from_node(Node::new(&json!({
            "content": { "application/json": { "schema": {
                "properties": { "age": { "type": "integer" } }
            } } }
        }))));
        op.responses = vec!["201".into(), "400".into()];
        let block = render_operation(&op, &SpecDocument::default());

        assert!(block.text.contains(r#"let body_POST__pets = JSON.stringify({"age": 123});"#));
        assert!(block.text.contains(
            "let response_POST__pets = http.post(`${BASE_URL}/pets`, body_POST__pets, { headers: HEADERS });"
        ));
        assert!(block.text.contains("[201, 400].includes(r.status)"));
    }

    #[test]
    fn test_get_with_body_does_not_send_it() {
        let mut op = OperationDefinition::new("/search", "get");
        op.request_body = Some(RequestBodyDefinition::default());
        let block = render_operation(&op, &SpecDocument::default());

        assert!(block.text.contains("let body_GET__search = JSON.stringify({});"));
        assert!(block.text.contains("http.get(`${BASE_URL}/search`, { headers: HEADERS });"));
    }

    #[test]
    fn test_delete_and_unusual_methods() {
        let block = render_operation(&OperationDefinition::new("/a", "delete"), &SpecDocument::default());
        assert!(block.text.contains("http.del(`${BASE_URL}/a`, null, { headers: HEADERS });"));

        let block = render_operation(&OperationDefinition::new("/a", "trace"), &SpecDocument::default());
        assert!(block.text.contains("http.request('TRACE', `${BASE_URL}/a`, null, { headers: HEADERS });"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut op = OperationDefinition::new("/items/{id}", "put");
        op.parameters = vec![param(json!({ "name": "id", "in": "path", "enum": ["a"] }))];
        let spec = SpecDocument::default();
        assert_eq!(render_operation(&op, &spec), render_operation(&op, &spec));
    }
}

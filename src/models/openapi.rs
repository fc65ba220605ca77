//! Read-only model of an OpenAPI document
//!
//! The reader is deliberately lenient: a missing or mistyped substructure
//! becomes an empty collection or `None`, never an error. Only operations
//! under the standard HTTP method keys of a path item are collected.

use indexmap::IndexMap;
use serde_json::Value;

/// Prefix stripped from schema `$ref` pointers
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Prefix stripped from parameter `$ref` pointers
pub const PARAMETER_REF_PREFIX: &str = "#/components/parameters/";

/// Path item keys that hold operations
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Borrowed accessor over a JSON tree
///
/// Lookups return `Option` so absence is handled at each step instead of
/// through null checks.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a>(&'a Value);

impl<'a> Node<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    pub fn value(self) -> &'a Value {
        self.0
    }

    /// Child of an object node
    pub fn get(self, key: &str) -> Option<Node<'a>> {
        self.0.as_object()?.get(key).map(Node)
    }

    /// Descend through a chain of object keys
    pub fn at(self, keys: &[&str]) -> Option<Node<'a>> {
        keys.iter().try_fold(self, |node, key| node.get(key))
    }

    pub fn as_str(self) -> Option<&'a str> {
        self.0.as_str()
    }

    /// Object entries in document order (empty for non-objects)
    pub fn entries(self) -> impl Iterator<Item = (&'a str, Node<'a>)> {
        self.0
            .as_object()
            .into_iter()
            .flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), Node(v))))
    }

    /// Array items in order (empty for non-arrays)
    pub fn items(self) -> impl Iterator<Item = Node<'a>> {
        self.0.as_array().into_iter().flatten().map(Node)
    }
}

/// A schema-like property bag: a body schema, one of its properties, or the
/// sample-value view of a parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
    pub schema_type: Option<String>,
    pub properties: IndexMap<String, SchemaNode>,
    pub example: Option<Value>,
    pub default: Option<Value>,
    pub enum_values: Vec<Value>,
    pub reference: Option<String>,
}

impl SchemaNode {
    pub fn from_node(node: Node<'_>) -> Self {
        Self {
            schema_type: node.get("type").and_then(declared_type),
            properties: node
                .get("properties")
                .map(|props| {
                    props
                        .entries()
                        .map(|(name, schema)| (name.to_string(), SchemaNode::from_node(schema)))
                        .collect()
                })
                .unwrap_or_default(),
            example: node.get("example").map(|n| n.value().clone()),
            default: node.get("default").map(|n| n.value().clone()),
            enum_values: enum_values(node),
            reference: node.get("$ref").and_then(Node::as_str).map(str::to_string),
        }
    }

    /// Registry name of a `#/components/schemas/` reference
    pub fn ref_name(&self) -> Option<&str> {
        self.reference.as_deref()?.strip_prefix(SCHEMA_REF_PREFIX)
    }

    /// First present of `example`, `default`, first `enum` member
    pub fn declared_value(&self) -> Option<&Value> {
        self.example
            .as_ref()
            .or(self.default.as_ref())
            .or(self.enum_values.first())
    }
}

/// `type` is a string in 3.0 and may be an array in 3.1; the first non-null
/// member is used.
fn declared_type(node: Node<'_>) -> Option<String> {
    match node.value() {
        Value::String(s) => Some(s.clone()),
        Value::Array(_) => node
            .items()
            .filter_map(Node::as_str)
            .find(|t| *t != "null")
            .map(str::to_string),
        _ => None,
    }
}

fn enum_values(node: Node<'_>) -> Vec<Value> {
    node.get("enum")
        .map(|e| e.items().map(|item| item.value().clone()).collect())
        .unwrap_or_default()
}

/// Where a parameter goes in the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Other(String),
}

impl ParameterLocation {
    pub fn parse(value: &str) -> Self {
        match value {
            "path" => Self::Path,
            "query" => Self::Query,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDefinition {
    /// `None` when the parameter declares no name; such parameters are skipped
    pub name: Option<String>,
    pub location: ParameterLocation,
    /// Sample sources: the parameter's own `example`/`default`/`enum`/`type`,
    /// each falling back to the same key of its `schema`
    pub sample: SchemaNode,
}

impl ParameterDefinition {
    pub fn from_node(node: Node<'_>) -> Self {
        let schema = node
            .get("schema")
            .map(SchemaNode::from_node)
            .unwrap_or_default();
        let own_enum = enum_values(node);

        let sample = SchemaNode {
            schema_type: node.get("type").and_then(declared_type).or(schema.schema_type),
            properties: IndexMap::new(),
            example: node
                .get("example")
                .map(|n| n.value().clone())
                .or(schema.example),
            default: node
                .get("default")
                .map(|n| n.value().clone())
                .or(schema.default),
            enum_values: if own_enum.is_empty() {
                schema.enum_values
            } else {
                own_enum
            },
            reference: None,
        };

        Self {
            name: node.get("name").and_then(Node::as_str).map(str::to_string),
            location: ParameterLocation::parse(
                node.get("in").and_then(Node::as_str).unwrap_or_default(),
            ),
            sample,
        }
    }

    fn key(&self) -> (Option<&str>, &ParameterLocation) {
        (self.name.as_deref(), &self.location)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBodyDefinition {
    /// Schema of the `application/json` media entry, if any
    pub json_schema: Option<SchemaNode>,
}

impl RequestBodyDefinition {
    pub fn from_node(node: Node<'_>) -> Self {
        let content = node.get("content");
        let media = content.and_then(|c| {
            c.get("application/json").or_else(|| {
                c.entries()
                    .find(|(media_type, _)| {
                        media_type
                            .split(';')
                            .next()
                            .is_some_and(|essence| essence.trim() == "application/json")
                    })
                    .map(|(_, media)| media)
            })
        });

        Self {
            json_schema: media
                .and_then(|m| m.get("schema"))
                .map(SchemaNode::from_node),
        }
    }
}

/// One HTTP method on one path
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDefinition {
    pub path: String,
    pub method: String,
    pub parameters: Vec<ParameterDefinition>,
    pub request_body: Option<RequestBodyDefinition>,
    /// Keys under `responses`, in declared order
    pub responses: Vec<String>,
    pub tags: Vec<String>,
}

impl OperationDefinition {
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            parameters: Vec::new(),
            request_body: None,
            responses: Vec::new(),
            tags: Vec::new(),
        }
    }
}

/// Root of a parsed OpenAPI document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecDocument {
    pub title: Option<String>,
    pub version: Option<String>,
    /// Operations in path order, then method order within each path
    pub operations: Vec<OperationDefinition>,
    /// `components.schemas`, used for `$ref` resolution
    pub schemas: IndexMap<String, SchemaNode>,
}

impl SpecDocument {
    pub fn from_value(root: &Value) -> Self {
        let root = Node::new(root);
        let shared_parameters = root.at(&["components", "parameters"]);

        let mut operations = Vec::new();
        if let Some(paths) = root.get("paths") {
            for (path, item) in paths.entries() {
                let path_parameters = read_parameters(item, shared_parameters);

                for (method, op) in item.entries() {
                    if !HTTP_METHODS.contains(&method.to_ascii_lowercase().as_str()) {
                        continue;
                    }
                    operations.push(read_operation(
                        path,
                        method,
                        op,
                        &path_parameters,
                        shared_parameters,
                    ));
                }
            }
        }

        let schemas = root
            .at(&["components", "schemas"])
            .map(|s| {
                s.entries()
                    .map(|(name, schema)| (name.to_string(), SchemaNode::from_node(schema)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title: root
                .at(&["info", "title"])
                .and_then(Node::as_str)
                .map(str::to_string),
            version: root
                .at(&["info", "version"])
                .and_then(Node::as_str)
                .map(str::to_string),
            operations,
            schemas,
        }
    }

    /// Follow at most one `$ref` hop into the schema registry.
    ///
    /// Returns `None` when the reference names no registered schema.
    pub fn resolve_schema<'s>(&'s self, schema: &'s SchemaNode) -> Option<&'s SchemaNode> {
        match schema.reference {
            Some(_) => self.schemas.get(schema.ref_name()?),
            None => Some(schema),
        }
    }
}

fn read_operation(
    path: &str,
    method: &str,
    op: Node<'_>,
    path_parameters: &[ParameterDefinition],
    shared: Option<Node<'_>>,
) -> OperationDefinition {
    let own = read_parameters(op, shared);

    let mut parameters: Vec<ParameterDefinition> = path_parameters
        .iter()
        .filter(|p| !own.iter().any(|o| o.key() == p.key()))
        .cloned()
        .collect();
    parameters.extend(own);

    let tags = op
        .get("tags")
        .map(|tags| {
            tags.items()
                .map(|tag| match tag.value() {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    OperationDefinition {
        path: path.to_string(),
        method: method.to_string(),
        parameters,
        request_body: op
            .get("requestBody")
            .filter(|body| !body.value().is_null())
            .map(RequestBodyDefinition::from_node),
        responses: op
            .get("responses")
            .map(|r| r.entries().map(|(code, _)| code.to_string()).collect())
            .unwrap_or_default(),
        tags,
    }
}

fn read_parameters(owner: Node<'_>, shared: Option<Node<'_>>) -> Vec<ParameterDefinition> {
    owner
        .get("parameters")
        .map(|params| {
            params
                .items()
                .map(|param| ParameterDefinition::from_node(resolve_parameter(param, shared)))
                .collect()
        })
        .unwrap_or_default()
}

/// One hop through `#/components/parameters/`; an unresolved ref yields the
/// ref object itself, which has no name and is skipped downstream.
fn resolve_parameter<'a>(param: Node<'a>, shared: Option<Node<'a>>) -> Node<'a> {
    param
        .get("$ref")
        .and_then(Node::as_str)
        .and_then(|r| r.strip_prefix(PARAMETER_REF_PREFIX))
        .and_then(|name| shared?.get(name))
        .unwrap_or(param)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operations_in_discovery_order() {
        let doc = SpecDocument::from_value(&json!({
            "paths": {
                "/zeta": { "post": {}, "get": {} },
                "/alpha": { "delete": {} }
            }
        }));

        let seen: Vec<(&str, &str)> = doc
            .operations
            .iter()
            .map(|o| (o.path.as_str(), o.method.as_str()))
            .collect();
        assert_eq!(
            seen,
            vec![("/zeta", "post"), ("/zeta", "get"), ("/alpha", "delete")]
        );
    }

    #[test]
    fn test_non_method_keys_are_not_operations() {
        let doc = SpecDocument::from_value(&json!({
            "paths": {
                "/pets": {
                    "summary": "Pets",
                    "parameters": [],
                    "get": {}
                }
            }
        }));
        assert_eq!(doc.operations.len(), 1);
        assert_eq!(doc.operations[0].method, "get");
    }

    #[test]
    fn test_malformed_document_degrades_to_empty() {
        let doc = SpecDocument::from_value(&json!({ "paths": 7, "components": "x" }));
        assert!(doc.operations.is_empty());
        assert!(doc.schemas.is_empty());

        let doc = SpecDocument::from_value(&json!([1, 2, 3]));
        assert!(doc.operations.is_empty());
    }

    #[test]
    fn test_missing_operation_fields_are_absent() {
        let doc = SpecDocument::from_value(&json!({ "paths": { "/a": { "get": {} } } }));
        let op = &doc.operations[0];
        assert!(op.parameters.is_empty());
        assert!(op.request_body.is_none());
        assert!(op.responses.is_empty());
        assert!(op.tags.is_empty());
    }

    #[test]
    fn test_parameter_values_fall_back_to_schema() {
        let param = ParameterDefinition::from_node(Node::new(&json!({
            "name": "limit",
            "in": "query",
            "schema": { "type": "integer", "default": 10 }
        })));
        assert_eq!(param.location, ParameterLocation::Query);
        assert_eq!(param.sample.default, Some(json!(10)));
        assert_eq!(param.sample.schema_type.as_deref(), Some("integer"));
    }

    #[test]
    fn test_parameter_own_values_win_over_schema() {
        let param = ParameterDefinition::from_node(Node::new(&json!({
            "name": "id",
            "in": "path",
            "example": "abc",
            "schema": { "example": "xyz" }
        })));
        assert_eq!(param.sample.example, Some(json!("abc")));
    }

    #[test]
    fn test_path_level_parameters_are_merged() {
        let doc = SpecDocument::from_value(&json!({
            "paths": {
                "/items/{id}": {
                    "parameters": [
                        { "name": "id", "in": "path", "example": "1" },
                        { "name": "trace", "in": "query" }
                    ],
                    "get": {
                        "parameters": [{ "name": "id", "in": "path", "example": "2" }]
                    }
                }
            }
        }));

        let params = &doc.operations[0].parameters;
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name.as_deref(), Some("trace"));
        assert_eq!(params[1].sample.example, Some(json!("2")));
    }

    #[test]
    fn test_parameter_ref_is_resolved_once() {
        let doc = SpecDocument::from_value(&json!({
            "paths": {
                "/a": { "get": { "parameters": [
                    { "$ref": "#/components/parameters/Page" },
                    { "$ref": "#/components/parameters/Missing" }
                ] } }
            },
            "components": {
                "parameters": { "Page": { "name": "page", "in": "query", "example": 3 } }
            }
        }));

        let params = &doc.operations[0].parameters;
        assert_eq!(params[0].name.as_deref(), Some("page"));
        assert_eq!(params[1].name, None);
    }

    #[test]
    fn test_json_media_type_with_parameters() {
        let body = RequestBodyDefinition::from_node(Node::new(&json!({
            "content": {
                "text/plain": { "schema": { "type": "string" } },
                "application/json; charset=utf-8": { "schema": { "type": "object" } }
            }
        })));
        let schema = body.json_schema.unwrap();
        assert_eq!(schema.schema_type.as_deref(), Some("object"));
    }

    #[test]
    fn test_resolve_schema_single_hop() {
        let doc = SpecDocument::from_value(&json!({
            "components": { "schemas": {
                "Pet": { "properties": { "name": { "type": "string" } } },
                "Alias": { "$ref": "#/components/schemas/Pet" }
            } }
        }));

        let direct = SchemaNode {
            reference: Some("#/components/schemas/Pet".to_string()),
            ..Default::default()
        };
        assert_eq!(doc.resolve_schema(&direct).unwrap().properties.len(), 1);

        let alias = SchemaNode {
            reference: Some("#/components/schemas/Alias".to_string()),
            ..Default::default()
        };
        assert!(doc.resolve_schema(&alias).unwrap().properties.is_empty());

        let dangling = SchemaNode {
            reference: Some("#/components/schemas/Nope".to_string()),
            ..Default::default()
        };
        assert!(doc.resolve_schema(&dangling).is_none());
    }

    #[test]
    fn test_type_array_uses_first_non_null() {
        let schema = SchemaNode::from_node(Node::new(&json!({ "type": ["null", "integer"] })));
        assert_eq!(schema.schema_type.as_deref(), Some("integer"));
    }
}

//! Tag-based grouping of operations

use crate::models::openapi::{OperationDefinition, SpecDocument};
use indexmap::IndexMap;

/// Group for operations that declare no tag
pub const DEFAULT_GROUP: &str = "general";

/// Operations sharing a first tag
#[derive(Debug, Clone)]
pub struct GroupedOperation<'a> {
    pub tag: String,
    pub operations: Vec<&'a OperationDefinition>,
}

/// Groups keyed by tag in order of first discovery
#[derive(Debug, Clone, Default)]
pub struct TagGroups<'a> {
    groups: IndexMap<String, Vec<&'a OperationDefinition>>,
}

impl<'a> TagGroups<'a> {
    /// Partition operations by first tag, keeping document order
    pub fn from_spec(spec: &'a SpecDocument) -> Self {
        let mut groups = Self::default();
        for operation in &spec.operations {
            groups.push(operation);
        }
        groups
    }

    pub fn push(&mut self, operation: &'a OperationDefinition) {
        self.groups
            .entry(group_tag(operation).to_string())
            .or_default()
            .push(operation);
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a OperationDefinition])> {
        self.groups
            .iter()
            .map(|(tag, ops)| (tag.as_str(), ops.as_slice()))
    }

    pub fn into_groups(self) -> Vec<GroupedOperation<'a>> {
        self.groups
            .into_iter()
            .map(|(tag, operations)| GroupedOperation { tag, operations })
            .collect()
    }
}

/// First declared tag, or the default group when absent or empty
pub fn group_tag(operation: &OperationDefinition) -> &str {
    operation
        .tags
        .first()
        .map(String::as_str)
        .filter(|tag| !tag.is_empty())
        .unwrap_or(DEFAULT_GROUP)
}

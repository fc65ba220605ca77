//! k6 script assembly
//!
//! Wraps the rendered blocks of every tag group in a `group()` call that only
//! runs when `GROUP_NAME` is unset or names that tag, so one generated script
//! serves both full and single-group runs.

use crate::error::Result;
use crate::models::openapi::SpecDocument;

use super::grouping::{GroupedOperation, TagGroups};
use super::js::single_quoted;
use super::operation::{RenderedBlock, render_operation};
use super::{Converter, GenerationSettings};
use std::fmt;

/// Indentation of operation statements inside `group(..., () => { ... })`
const BLOCK_INDENT: usize = 6;

const IMPORTS: &str = "\
import http from 'k6/http';
import { check, sleep, group } from 'k6';
import { textSummary } from 'https://jslib.k6.io/k6-summary/0.0.1/index.js';
";

const SUMMARY: &str = "\
export function handleSummary(data) {
  return {
    'stdout': textSummary(data, { indent: ' ', enableColors: true }),
  };
}
";

/// All rendered blocks of one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGroup {
    pub tag: String,
    pub blocks: Vec<RenderedBlock>,
}

/// Complete generated script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalScript(String);

impl FinalScript {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FinalScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Converter producing k6 JavaScript
#[derive(Debug, Clone, Default)]
pub struct K6Converter;

impl K6Converter {
    pub fn new() -> Self {
        Self
    }

    /// Render every operation of a group in order
    pub fn render_group(group: &GroupedOperation<'_>, spec: &SpecDocument) -> RenderedGroup {
        RenderedGroup {
            tag: group.tag.clone(),
            blocks: group
                .operations
                .iter()
                .map(|operation| render_operation(operation, spec))
                .collect(),
        }
    }

    fn generate_options(settings: &GenerationSettings) -> String {
        format!(
            "export const options = {{ vus: {}, duration: {} }};\n",
            settings.vus,
            single_quoted(&settings.duration)
        )
    }

    fn generate_constants(settings: &GenerationSettings) -> String {
        let target_group = match settings.default_group {
            Some(ref group) => format!("__ENV.GROUP_NAME || {}", single_quoted(group)),
            None => "__ENV.GROUP_NAME".to_string(),
        };

        let lines = [
            format!("const BASE_URL = {};", single_quoted(&settings.base_url)),
            format!("const TOKEN = {};", single_quoted(&settings.token)),
            format!("const COMPANY = {};", single_quoted(&settings.company)),
            String::new(),
            "const HEADERS = {".to_string(),
            "  'Authorization': `Bearer ${TOKEN}`,".to_string(),
            "  'Content-Type': 'application/json',".to_string(),
            "};".to_string(),
            String::new(),
            format!("const TARGET_GROUP = {};", target_group),
        ];
        format!("{}\n", lines.join("\n"))
    }

    fn generate_group(group: &RenderedGroup) -> String {
        let tag = single_quoted(&group.tag);
        let body = group
            .blocks
            .iter()
            .map(|block| indent(&block.text, BLOCK_INDENT))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "  if (!TARGET_GROUP || TARGET_GROUP === {tag}) {{\n    group({tag}, () => {{\n{body}\n    }});\n  }}"
        )
    }
}

/// Wrap rendered groups into one runnable script.
///
/// Groups appear in the order given, which is tag discovery order when they
/// come from [`TagGroups`].
pub fn assemble_script(groups: &[RenderedGroup], settings: &GenerationSettings) -> FinalScript {
    let operation_count: usize = groups.iter().map(|g| g.blocks.len()).sum();

    let mut sections = Vec::new();
    sections.push(format!(
        "// k6 script generated from OpenAPI specification\n// Contains {} operations in {} groups\n",
        operation_count,
        groups.len()
    ));
    sections.push(IMPORTS.to_string());
    sections.push(K6Converter::generate_options(settings));
    sections.push(K6Converter::generate_constants(settings));

    let mut entry = vec!["export default function () {".to_string()];
    entry.extend(groups.iter().map(K6Converter::generate_group));
    entry.push("}".to_string());
    sections.push(format!("{}\n", entry.join("\n")));

    sections.push(SUMMARY.to_string());

    FinalScript(sections.join("\n"))
}

fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Converter for K6Converter {
    type Output = FinalScript;

    fn convert_spec(
        &self,
        spec: &SpecDocument,
        settings: &GenerationSettings,
    ) -> Result<Self::Output> {
        settings.validate()?;

        tracing::info!("Grouping {} operations by tag", spec.operations.len());
        let groups = TagGroups::from_spec(spec).into_groups();

        tracing::info!("Rendering {} groups", groups.len());
        let rendered: Vec<RenderedGroup> = groups
            .iter()
            .map(|group| Self::render_group(group, spec))
            .collect();

        tracing::info!("Assembling final script");
        Ok(assemble_script(&rendered, settings))
    }
}

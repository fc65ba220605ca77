//! Converters for generating load-test scripts from OpenAPI documents
//!
//! The pipeline is: group operations by tag, render each operation into a
//! test block, then assemble the blocks into one script.

pub mod grouping;
pub mod js;
pub mod k6;
pub mod operation;
pub mod request_body;
pub mod values;

pub use k6::{FinalScript, K6Converter, assemble_script};

use crate::error::{K6GenError, Result};
use crate::models::openapi::SpecDocument;

/// Values baked into the generated script
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// Base URL every request is issued against
    pub base_url: String,
    /// Bearer token for the `Authorization` header
    pub token: String,
    /// Value substituted for `{company}` path placeholders
    pub company: String,
    /// Number of virtual users
    pub vus: u32,
    /// Test duration (e.g., "3s", "5m")
    pub duration: String,
    /// Group run when `GROUP_NAME` is not supplied at run time
    pub default_group: Option<String>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            token: String::new(),
            company: "my-company".to_string(),
            vus: 1,
            duration: "3s".to_string(),
            default_group: None,
        }
    }
}

impl GenerationSettings {
    /// Reject settings that would produce an unusable script
    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(K6GenError::MissingToken);
        }
        if self.vus == 0 {
            return Err(K6GenError::InvalidSetting(
                "vus must be at least 1".to_string(),
            ));
        }
        if self.duration.trim().is_empty() {
            return Err(K6GenError::InvalidSetting(
                "duration must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Trait for converting an OpenAPI document to a test script
pub trait Converter {
    /// The output type of the conversion
    type Output;

    /// Convert every operation of the document
    fn convert_spec(
        &self,
        spec: &SpecDocument,
        settings: &GenerationSettings,
    ) -> Result<Self::Output>;
}

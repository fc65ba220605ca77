//! End-to-end generation pipeline
//!
//! validate settings → load → parse → group → render → assemble → write.
//! Nothing is written unless every earlier step succeeded.

use crate::converters::{Converter, FinalScript, GenerationSettings, K6Converter};
use crate::error::Result;
use crate::{loader, output};
use std::path::{Path, PathBuf};

/// Generate the script for the spec at `source` (URL or file path).
///
/// Settings are validated before the spec is loaded, so an empty token never
/// triggers a fetch.
pub async fn generate_script(source: &str, settings: &GenerationSettings) -> Result<FinalScript> {
    settings.validate()?;

    tracing::info!("Fetching and parsing OpenAPI spec from {}", source);
    let spec = loader::load_source(source).await?;

    K6Converter::new().convert_spec(&spec, settings)
}

/// Generate the script and write it to `output_dir`, returning the file path
pub async fn generate_to_dir(
    source: &str,
    settings: &GenerationSettings,
    output_dir: &Path,
) -> Result<PathBuf> {
    let script = generate_script(source, settings).await?;
    output::write_script(output_dir, &script)
}

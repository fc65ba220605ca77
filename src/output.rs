//! Writing the generated script to disk

use crate::converters::FinalScript;
use crate::error::{K6GenError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name of the generated script inside the output directory
pub const OUTPUT_FILE_NAME: &str = "generatedK6Script.js";

/// Write the script as `<dir>/generatedK6Script.js`.
///
/// The content goes to a temporary file in `dir` that is renamed into place
/// only once fully written.
pub fn write_script(dir: &Path, script: &FinalScript) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(script.as_str().as_bytes())?;
    file.flush()?;

    let target = dir.join(OUTPUT_FILE_NAME);
    file.persist(&target)
        .map_err(|e| K6GenError::IoError(e.error))?;

    tracing::info!("k6 script saved to: {}", target.display());
    Ok(target)
}

//! Generate command implementation

use crate::converters::{FinalScript, GenerationSettings};
use crate::error::{K6GenError, Result};
use crate::{output, service};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Arguments for [`execute_generate`]
#[derive(Debug, Clone)]
pub struct GenerateCommandArgs<'a> {
    /// Spec URL or file path
    pub spec: Option<&'a str>,
    pub settings: GenerationSettings,
    pub output_dir: &'a Path,
    /// Print the script instead of writing it
    pub to_stdout: bool,
}

/// Result of a generate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutput {
    /// Script to be printed on stdout
    Script(FinalScript),
    /// Script written to this path
    Written(PathBuf),
}

/// Run the pipeline without printing anything to stdout.
///
/// Progress goes to stderr so stdout can carry the script alone.
pub async fn generate(args: &GenerateCommandArgs<'_>) -> Result<GenerateOutput> {
    args.settings.validate()?;

    let spec = args.spec.ok_or_else(|| {
        K6GenError::InvalidSetting(
            "no OpenAPI spec given (use --spec or K6GEN_SPEC_URL)".to_string(),
        )
    })?;

    eprintln!("{} Generating k6 script from {}", "→".blue(), spec);
    let script = service::generate_script(spec, &args.settings).await?;

    if args.to_stdout {
        Ok(GenerateOutput::Script(script))
    } else {
        Ok(GenerateOutput::Written(output::write_script(
            args.output_dir,
            &script,
        )?))
    }
}

/// Execute the generate command
pub async fn execute_generate(args: GenerateCommandArgs<'_>) -> Result<()> {
    match generate(&args).await? {
        GenerateOutput::Script(script) => print!("{}", script),
        GenerateOutput::Written(path) => println!(
            "{} K6 script generated successfully: {}",
            "✓".green(),
            path.display()
        ),
    }

    Ok(())
}

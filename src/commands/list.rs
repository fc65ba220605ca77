use crate::converters::grouping::TagGroups;
use crate::converters::operation::expected_status_codes;
use crate::error::{K6GenError, Result};
use crate::loader;
use colored::*;

pub async fn execute_list(spec_location: Option<&str>) -> Result<()> {
    let location = spec_location.ok_or_else(|| {
        K6GenError::InvalidSetting(
            "no OpenAPI spec given (use --spec or K6GEN_SPEC_URL)".to_string(),
        )
    })?;

    println!("{}", "Loading OpenAPI spec...".bright_blue());
    println!("  Source: {}", location);

    let spec = loader::load_source(location).await?;

    println!("\n{}", "✓ OpenAPI spec loaded successfully".green());
    if let Some(ref title) = spec.title {
        println!("  Title: {}", title.bold());
    }
    if let Some(ref version) = spec.version {
        println!("  Version: {}", version);
    }
    println!();

    let groups = TagGroups::from_spec(&spec);
    if groups.is_empty() {
        println!("{}", "No operations found".yellow());
        return Ok(());
    }

    println!("{}", format!("Groups ({}):", groups.len()).bold());
    for (idx, (tag, operations)) in groups.iter().enumerate() {
        println!();
        println!(
            "  {}. {} {} ({} operations)",
            idx + 1,
            "Group:".bright_cyan(),
            tag.bold(),
            operations.len()
        );

        for operation in operations {
            let codes: Vec<String> = expected_status_codes(operation)
                .iter()
                .map(u16::to_string)
                .collect();
            println!(
                "       {} {} {}",
                operation.method.to_uppercase().bright_yellow(),
                operation.path,
                format!("[{}]", codes.join(", ")).dimmed()
            );
        }
    }

    Ok(())
}

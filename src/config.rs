use crate::converters::GenerationSettings;
use std::path::PathBuf;

/// Defaults for generation, read from the environment
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub spec_url: Option<String>,
    pub settings: GenerationSettings,
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    pub fn from_env() -> Self {
        let defaults = GenerationSettings::default();

        let vus = std::env::var("K6GEN_VUS")
            .ok()
            .map(|v| parse_vus(&v, defaults.vus))
            .unwrap_or(defaults.vus);

        let settings = GenerationSettings {
            base_url: std::env::var("K6GEN_BASE_URL").unwrap_or(defaults.base_url),
            token: std::env::var("K6GEN_TOKEN").unwrap_or_default(),
            company: std::env::var("K6GEN_COMPANY").unwrap_or(defaults.company),
            vus,
            duration: std::env::var("K6GEN_DURATION").unwrap_or(defaults.duration),
            default_group: std::env::var("K6GEN_DEFAULT_GROUP")
                .ok()
                .filter(|g| !g.is_empty()),
        };

        let output_dir = std::env::var("K6GEN_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_output_dir());

        Self {
            spec_url: std::env::var("K6GEN_SPEC_URL").ok().filter(|u| !u.is_empty()),
            settings,
            output_dir,
        }
    }
}

/// Parse a virtual-user count, warning and keeping `fallback` when invalid
fn parse_vus(value: &str, fallback: u32) -> u32 {
    value.trim().parse().unwrap_or_else(|e| {
        tracing::warn!(
            "Ignoring invalid K6GEN_VUS value '{}': {}; using {}",
            value,
            e,
            fallback
        );
        fallback
    })
}

/// `$HOME/Documents/scripts`, or `./scripts` without a home directory
pub fn default_output_dir() -> PathBuf {
    std::env::var("HOME")
        .map(|home| PathBuf::from(home).join("Documents").join("scripts"))
        .unwrap_or_else(|_| PathBuf::from("scripts"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vus() {
        assert_eq!(parse_vus("10", 1), 10);
        assert_eq!(parse_vus(" 3 ", 1), 3);
        assert_eq!(parse_vus("ten", 1), 1);
        assert_eq!(parse_vus("-2", 4), 4);
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum K6GenError {
    #[error("Bearer token must not be empty")]
    MissingToken,

    #[error("Failed to fetch OpenAPI spec: {0}")]
    SpecFetchError(String),

    #[error("Failed to parse OpenAPI spec: {0}")]
    SpecParseError(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, K6GenError>;

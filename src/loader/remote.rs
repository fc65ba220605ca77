use crate::error::{K6GenError, Result};
use std::time::Duration;

/// Fetch OpenAPI text over HTTP(S).
///
/// Any transport failure or non-success status is reported as a single
/// `SpecFetchError`; there is no retry.
pub async fn fetch_openapi(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| K6GenError::SpecFetchError(format!("Failed to build HTTP client: {}", e)))?;

    let response = client.get(url).send().await.map_err(|e| {
        tracing::error!("Failed to retrieve OpenAPI spec from {}: {}", url, e);
        K6GenError::SpecFetchError(format!("Unable to connect to {}: {}", url, e))
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!("Non-success response from {} (status: {})", url, status);
        return Err(K6GenError::SpecFetchError(format!(
            "Received status code {} from {}",
            status.as_u16(),
            url
        )));
    }

    let body = response.text().await.map_err(|e| {
        K6GenError::SpecFetchError(format!("Failed to read response from {}: {}", url, e))
    })?;

    tracing::info!("Retrieved OpenAPI spec from {}", url);
    Ok(body)
}

use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::error::K6GenError;
use crate::service;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GeneratorConfig>,
}

/// Query for /api/k6/generate; absent values fall back to configuration
#[derive(Debug, Default, Deserialize)]
pub struct GenerateQuery {
    pub spec_url: Option<String>,
    pub token: Option<String>,
    pub base_url: Option<String>,
    pub company: Option<String>,
}

/// GET /api/k6/generate - Generate a script and write it to the output directory
pub async fn generate(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
) -> (StatusCode, String) {
    let mut settings = state.config.settings.clone();
    if let Some(token) = query.token {
        settings.token = token;
    }
    if let Some(base_url) = query.base_url {
        settings.base_url = base_url;
    }
    if let Some(company) = query.company {
        settings.company = company;
    }

    if let Err(e) = settings.validate() {
        return error_response(e);
    }

    let Some(spec_url) = query.spec_url.or_else(|| state.config.spec_url.clone()) else {
        return error_response(K6GenError::InvalidSetting(
            "spec_url is required".to_string(),
        ));
    };

    match service::generate_to_dir(&spec_url, &settings, &state.config.output_dir).await {
        Ok(path) => (
            StatusCode::OK,
            format!("K6 script generated successfully at {}", path.display()),
        ),
        Err(e) => error_response(e),
    }
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

fn error_response(error: K6GenError) -> (StatusCode, String) {
    let status = match error {
        K6GenError::MissingToken | K6GenError::InvalidSetting(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::error!("Script generation failed: {}", error);
    (status, format!("Error: {}", error))
}

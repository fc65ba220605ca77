pub mod api;

use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::GeneratorConfig;

/// Build the HTTP trigger router
pub fn router(config: GeneratorConfig) -> Router {
    let state = api::AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/api/k6/generate", get(api::generate))
        .route("/health", get(api::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the web server
pub async fn start_server(addr: SocketAddr, config: GeneratorConfig) -> crate::Result<()> {
    let app = router(config);

    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Trigger generation with GET http://{}/api/k6/generate", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub mod handlers;
mod page;
pub mod types;

use crate::{
    Result,
    config::Config,
    llm::{InferenceClient, OllamaClient},
    shell::{Shell, ShellHandle},
};
use axum::{
    Router,
    routing::{get, post, put},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        .route("/api/state", get(handlers::state))
        .route("/api/check", post(handlers::check))
        .route("/api/input", put(handlers::update_input))
        .route("/api/sample", post(handlers::load_sample))
        .route("/api/model", put(handlers::select_model))
        .route("/api/preview/toggle", post(handlers::toggle_preview))
        .route("/api/convert", post(handlers::convert))
        .route("/api/download", get(handlers::download))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize inference client
    let client: Arc<dyn InferenceClient> = Arc::new(OllamaClient::new(&config.ollama)?);
    info!("Using Ollama at {}", config.ollama.base_url);

    // Create application state
    let shell = ShellHandle::new(Shell::new(&config.ollama), client);
    let app_state = AppState {
        shell: shell.clone(),
        export: config.export.clone(),
    };

    // Initial connection check; the page re-checks on load as well
    tokio::spawn(async move {
        if let Err(e) = shell.check().await {
            warn!("Initial connection check failed: {}", e);
        }
    });

    let app = router(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

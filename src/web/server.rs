use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::WebConfig;
use crate::provider::NumberSource;
use crate::window::WindowStore;

use super::api::{get_numbers, health_check, AppState};

/// Assembles the router: numbers API plus static assets as the fallback.
pub fn build_router(
    store: Arc<WindowStore>,
    source: Arc<dyn NumberSource>,
    public_dir: &Path,
) -> Router {
    let state = AppState { store, source };

    Router::new()
        .route("/health", get(health_check))
        .route("/numbers/:source_key", get(get_numbers))
        .with_state(state)
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
}

/// Start the web server with the given window store and number source
pub async fn run_server(
    store: Arc<WindowStore>,
    source: Arc<dyn NumberSource>,
    web_config: WebConfig,
    mut shutdown_rx: watch::Receiver<bool>,
) -> Result<(), std::io::Error> {
    let app = build_router(store, source, &web_config.public_dir);

    let listener = TcpListener::bind(&web_config.listen).await?;
    tracing::info!("Web server listening on {}", web_config.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.wait_for(|&v| v).await;
            tracing::info!("Web server shutting down gracefully");
        })
        .await
}

use crate::config::{load_config, Config};
use crate::provider::LocalSource;
use crate::web::run_server;
use crate::window::WindowStore;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("web server error: {0}")]
    WebServer(#[from] std::io::Error),
}

pub async fn run(config_path: Option<PathBuf>) -> Result<(), RunError> {
    let config = match config_path {
        Some(path) => {
            info!(config_path = %path.display(), "Loading configuration");
            load_config(&path)?
        }
        None => {
            // Every setting has a default; a missing config file is fine.
            info!("No config file found, using built-in defaults");
            Config::default()
        }
    };

    info!(
        capacity = config.window.capacity,
        listen = %config.web.listen,
        "Starting winavg"
    );

    let store = Arc::new(WindowStore::new(config.window.capacity));
    let source = Arc::new(LocalSource::new(config.sources));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                info!("Received ctrl-c, shutting down");
                let _ = shutdown_tx.send(true);
            }
            Err(e) => error!(error = %e, "Failed to listen for ctrl-c"),
        }
    });

    run_server(store, source, config.web, shutdown_rx).await?;

    Ok(())
}

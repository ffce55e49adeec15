//! Server binary for the nazolog mystery-event blog.
//!
//! Startup sequence:
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `nazolog.yaml` (or the path given as the
//!    first argument), with environment overrides
//! 3. Construct the hybrid store and run its one-shot data-source probe
//!    eagerly so the verdict is logged before traffic arrives
//! 4. Serve the HTTP API

use std::path::Path;
use std::sync::Arc;

use nazolog_server::config::AppConfig;
use nazolog_server::server::{ServerConfig, start_server};
use nazolog_server::state::AppState;
use nazolog_store::{EventStore, HybridStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default configuration file path.
const DEFAULT_CONFIG_PATH: &str = "nazolog.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("nazolog-server starting");

    // 2. Load configuration.
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from(DEFAULT_CONFIG_PATH));
    let config = AppConfig::load(Path::new(&config_path))?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        max_connections = config.database.max_connections,
        "Configuration loaded"
    );

    // 3. Construct the store and probe the data source up front. The
    //    verdict is memoized for the life of the process.
    let store = Arc::new(HybridStore::new(config.remote_config()));
    let backend = store.backend().await;
    info!(?backend, "Data source selected");

    let state = Arc::new(AppState::new(
        store as Arc<dyn EventStore>,
        config.auth.password,
    ));

    // 4. Serve.
    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}

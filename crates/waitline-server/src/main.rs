//! Waitline backend binary.
//!
//! This is the entry point that wires together configuration, the seed
//! venue, and the HTTP server. State is in-memory only: every start
//! begins from the seed data.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `waitline.yaml` (or `WAITLINE_CONFIG`)
//! 3. Build the seed venue
//! 4. Serve the API until the process is terminated

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use waitline_api::state::AppState;
use waitline_core::config::WaitlineConfig;
use waitline_core::seed::demo_venue;

/// Default config file path, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "waitline.yaml";

/// Application entry point for the Waitline backend.
///
/// # Errors
///
/// Returns an error if the server cannot bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("waitline-server starting");

    // 2. Load configuration.
    let config = load_config();
    info!(
        host = config.server.host,
        port = config.server.port,
        default_avg_dining_minutes = config.queue.default_avg_dining_minutes,
        default_table_count = config.queue.default_table_count,
        "Configuration loaded"
    );

    // 3. Build the seed venue.
    let venue = demo_venue(&config.queue);
    info!(
        restaurant_count = venue.directory.len(),
        "Seed venue created; all queue data lives in memory and resets on restart"
    );

    // 4. Serve until terminated.
    let state = Arc::new(AppState::new(venue));
    waitline_api::start_server(&config.server, state).await?;

    Ok(())
}

/// Load configuration from `WAITLINE_CONFIG` or the default path.
///
/// A missing file is normal in development and falls back to defaults;
/// a file that exists but fails to parse is worth a warning before the
/// same fallback.
fn load_config() -> WaitlineConfig {
    let path = std::env::var("WAITLINE_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    if !path.exists() {
        info!(path = %path.display(), "No config file found; using defaults");
        let mut config = WaitlineConfig::default();
        config.server.apply_env_overrides();
        return config;
    }

    match WaitlineConfig::from_file(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load config; using defaults");
            let mut config = WaitlineConfig::default();
            config.server.apply_env_overrides();
            config
        }
    }
}

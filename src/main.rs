//! Songbook - a lyrics editor served to the browser from a local server.
//!
//! The application is organized into the following modules:
//!
//! - `store`: key-value storage and the persisted song collection
//! - `songs`: escaping, tag stripping, counts, previews and search
//! - `editor`: editor panel state machine
//! - `songbook`: the owned application state tying everything together
//! - `theme`, `toolbar`, `export`: the smaller page features
//! - `templates`: HTML/CSS/JS for the page
//! - `handlers`: HTTP route handlers

use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use songbook::{router, AppState, Config};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("songbook=info")),
        )
        .init();

    let config = Config::from_env();

    let state = match AppState::open(&config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!(error = %e, path = %config.db_path.display(), "failed to open storage");
            std::process::exit(1);
        }
    };

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listen address");

    info!(addr = %config.bind_addr, "songbook running at http://{}", config.bind_addr);
    info!(path = %config.db_path.display(), "storage directory");

    axum::serve(listener, app).await.expect("Server error");
}

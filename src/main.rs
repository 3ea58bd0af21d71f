//! ws-controller server entry point.
//!
//! Parses the command line, then starts the Axum HTTP server.

use tracing_subscriber::EnvFilter;

use ws_controller::api;
use ws_controller::app_state::AppState;
use ws_controller::config::ControllerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration; a missing command exits before binding
    let config = ControllerConfig::from_env_args()?;
    tracing::info!(
        command = %config.startup.command(),
        args = ?config.startup.args(),
        "starting ws-controller"
    );

    let app_state = AppState::from_config(&config);
    let app = api::build_router(app_state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::ControllerConfig;
use crate::service::CommandService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Command service for the guarded endpoint.
    pub command_service: Arc<CommandService>,
}

impl AppState {
    /// Builds the state from the startup configuration.
    #[must_use]
    pub fn from_config(config: &ControllerConfig) -> Self {
        let command_service = CommandService::new(
            Arc::clone(&config.startup),
            config.shared_secret.clone(),
        );
        Self {
            command_service: Arc::new(command_service),
        }
    }
}

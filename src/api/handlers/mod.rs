//! HTTP endpoint handlers.

pub mod controller;
pub mod index;

use axum::Router;

use crate::app_state::AppState;

/// Composes the index and controller routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(index::routes())
        .merge(controller::routes())
}

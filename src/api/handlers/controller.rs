//! Guarded command descriptor endpoint.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::TokenQuery;
use crate::app_state::AppState;
use crate::domain::CommandDescriptor;
use crate::error::ControllerError;

/// `GET /ws-controller` — Return the startup command for a valid token.
///
/// If `token` is repeated, the first value is used.
///
/// # Errors
///
/// Returns [`ControllerError::MissingToken`] for an absent or empty token
/// and [`ControllerError::InvalidToken`] for a wrong one.
#[utoipa::path(
    get,
    path = "/ws-controller",
    tag = "Controller",
    summary = "Describe the subprocess command",
    description = "Validates the shared-secret token and returns the command and arguments the controller was started with.",
    params(TokenQuery),
    responses(
        (status = 200, description = "Command descriptor", body = CommandDescriptor),
        (status = 400, description = "Token missing or empty"),
        (status = 403, description = "Token does not match"),
    )
)]
pub async fn ws_controller_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ControllerError> {
    let query = TokenQuery::from_pairs(pairs);
    let descriptor = state.command_service.describe(query.token.as_deref())?;
    Ok(Json(descriptor))
}

/// Controller route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/ws-controller", get(ws_controller_handler))
}

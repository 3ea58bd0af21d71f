//! Root redirect to the static landing page.

use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;

use crate::app_state::AppState;

/// Location of the landing page served by the static file service.
pub const INDEX_PATH: &str = "/static/index.html";

/// `GET /` — Redirect to the static `index.html`.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Landing page redirect",
    description = "Redirects to the statically served `index.html`. Any query string is ignored.",
    responses(
        (status = 302, description = "Redirect to /static/index.html"),
    )
)]
pub async fn index_handler() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, INDEX_PATH)])
}

/// Root route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler))
}

//! HTTP layer: route handlers, DTOs, OpenAPI document, router composition.

pub mod dto;
pub mod handlers;
pub mod openapi;

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the complete application router.
///
/// Mounts `/` and `/ws-controller`, serves `static_dir` under `/static`,
/// and, with the `swagger-ui` feature, the API docs.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let router = Router::new()
        .merge(handlers::routes())
        .nest_service("/static", ServeDir::new(static_dir));

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

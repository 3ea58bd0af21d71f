//! OpenAPI document for the controller's HTTP surface.

use utoipa::OpenApi;

use crate::api::handlers::{controller, index};
use crate::domain::CommandDescriptor;

/// Generated OpenAPI description of every route.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "ws-controller",
        description = "Token-guarded descriptor of the command a websocket bridge should run."
    ),
    paths(index::index_handler, controller::ws_controller_handler),
    components(schemas(CommandDescriptor)),
    tags(
        (name = "System", description = "Landing page"),
        (name = "Controller", description = "Command descriptor"),
    )
)]
pub struct ApiDoc;

//! Controller error types with HTTP status code mapping.
//!
//! [`ControllerError`] covers the per-request failures of `/ws-controller`.
//! Each variant maps to a fixed HTTP status and is sent with an empty body.
//! [`ConfigError`] covers startup failures, which end the process before
//! any listener is bound.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Request-level error for the guarded endpoint.
///
/// | Variant        | HTTP Status       |
/// |----------------|-------------------|
/// | `MissingToken` | 400 Bad Request   |
/// | `InvalidToken` | 403 Forbidden     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    /// The `token` query parameter is absent or empty.
    #[error("token missing")]
    MissingToken,

    /// The supplied token does not match the shared secret.
    #[error("invalid token")]
    InvalidToken,
}

impl ControllerError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingToken => StatusCode::BAD_REQUEST,
            Self::InvalidToken => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for ControllerError {
    fn into_response(self) -> Response {
        self.status_code().into_response()
    }
}

/// Startup configuration error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No command was given on the command line.
    #[error("missing command; usage: ws-controller <command> [args...]")]
    MissingCommand,
}

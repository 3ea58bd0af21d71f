//! Token-guarded access to the startup command.

use std::sync::Arc;

use crate::domain::{CommandDescriptor, SharedSecret, StartupConfig};
use crate::error::ControllerError;

/// Answers controller requests against the fixed startup command.
///
/// Holds only read-only data, so a single instance is shared across all
/// requests without locking.
#[derive(Debug)]
pub struct CommandService {
    startup: Arc<StartupConfig>,
    secret: SharedSecret,
}

impl CommandService {
    /// Creates a new service.
    #[must_use]
    pub fn new(startup: Arc<StartupConfig>, secret: SharedSecret) -> Self {
        Self { startup, secret }
    }

    /// Validates `token` and returns the command descriptor.
    ///
    /// Checks run in a fixed order: an absent or empty token is rejected
    /// first, then the request is logged, then the token is compared with
    /// the shared secret.
    ///
    /// # Errors
    ///
    /// - [`ControllerError::MissingToken`] if `token` is `None` or empty.
    /// - [`ControllerError::InvalidToken`] if `token` does not match.
    pub fn describe(&self, token: Option<&str>) -> Result<CommandDescriptor, ControllerError> {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => return Err(ControllerError::MissingToken),
        };

        // Logs the raw token value.
        tracing::info!(token = %token, "ws-subprocess controller request");

        if !self.secret.matches(token) {
            return Err(ControllerError::InvalidToken);
        }

        Ok(CommandDescriptor::from(self.startup.as_ref()))
    }
}

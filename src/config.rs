//! Controller configuration built from the process invocation.
//!
//! The only runtime input is the positional command line: the command to
//! describe and its arguments. Server settings are fixed defaults; no
//! environment variables or flags are read.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{SharedSecret, StartupConfig};
use crate::error::ConfigError;

/// Port the controller listens on.
pub const DEFAULT_PORT: u16 = 5000;

/// Directory served under `/static`.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Top-level controller configuration.
///
/// Loaded once at startup via [`ControllerConfig::from_env_args`].
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Socket address to bind the HTTP server to.
    pub listen_addr: SocketAddr,

    /// Directory holding `index.html` and other static assets.
    pub static_dir: PathBuf,

    /// Token callers must present to `/ws-controller`.
    pub shared_secret: SharedSecret,

    /// Command and arguments described to authorized callers.
    pub startup: Arc<StartupConfig>,
}

impl ControllerConfig {
    /// Builds the configuration from positional parameters, excluding the
    /// program name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCommand`] if `args` is empty.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let startup = StartupConfig::from_args(args)?;
        Ok(Self {
            listen_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            shared_secret: SharedSecret::default(),
            startup: Arc::new(startup),
        })
    }

    /// Builds the configuration from [`std::env::args`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCommand`] if the process was started
    /// without a command.
    pub fn from_env_args() -> Result<Self, ConfigError> {
        Self::from_args(std::env::args().skip(1))
    }
}

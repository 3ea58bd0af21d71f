//! The command and argument list captured from the process invocation.

use crate::error::ConfigError;

/// Immutable record of the command a websocket bridge should spawn.
///
/// Built once at process entry and shared read-only (behind an `Arc`)
/// for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    command: String,
    args: Vec<String>,
}

impl StartupConfig {
    /// Creates a config from an explicit command and argument list.
    #[must_use]
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    /// Builds the config from positional parameters, excluding the
    /// program name. The first parameter is the command; the rest become
    /// the argument list in order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCommand`] if no parameter is given.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let command = args.next().ok_or(ConfigError::MissingCommand)?;
        Ok(Self {
            command,
            args: args.collect(),
        })
    }

    /// The command to run.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Arguments passed to the command, in invocation order.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

//! JSON view of the startup command returned to authorized callers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::StartupConfig;

/// Command and arguments a websocket bridge should execute.
///
/// Always built fresh from the [`StartupConfig`], so every response
/// carries the same content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommandDescriptor {
    /// Executable to run.
    #[schema(example = "echo")]
    pub command: String,
    /// Arguments for the executable, in order.
    #[schema(example = json!(["hello", "world"]))]
    pub args: Vec<String>,
}

impl From<&StartupConfig> for CommandDescriptor {
    fn from(cfg: &StartupConfig) -> Self {
        Self {
            command: cfg.command().to_string(),
            args: cfg.args().to_vec(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_startup_config() {
        let cfg = StartupConfig::new("run", vec!["--flag".to_string()]);
        let descriptor = CommandDescriptor::from(&cfg);
        assert_eq!(descriptor.command, "run");
        assert_eq!(descriptor.args, vec!["--flag".to_string()]);
    }

    #[test]
    fn serializes_command_before_args() {
        let cfg = StartupConfig::new("echo", vec!["hello".to_string(), "world".to_string()]);
        let Ok(json) = serde_json::to_string(&CommandDescriptor::from(&cfg)) else {
            panic!("serialization failed");
        };
        assert_eq!(json, r#"{"command":"echo","args":["hello","world"]}"#);
    }

    #[test]
    fn empty_args_serialize_as_empty_array() {
        let cfg = StartupConfig::new("top", Vec::new());
        let value = serde_json::to_value(CommandDescriptor::from(&cfg)).ok();
        assert_eq!(
            value,
            Some(serde_json::json!({ "command": "top", "args": [] }))
        );
    }
}

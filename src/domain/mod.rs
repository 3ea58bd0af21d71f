//! Domain layer: the startup command, the shared secret, and the
//! descriptor handed back to authorized callers.

pub mod command_descriptor;
pub mod shared_secret;
pub mod startup_config;

pub use command_descriptor::CommandDescriptor;
pub use shared_secret::SharedSecret;
pub use startup_config::StartupConfig;

//! Service layer: token validation and descriptor construction.

pub mod command_service;

pub use command_service::CommandService;

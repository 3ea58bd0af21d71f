//! Data Transfer Objects for request parsing.

pub mod controller_dto;

pub use controller_dto::*;

//! # ws-controller
//!
//! Controller endpoint for a websocket-to-subprocess bridge.
//!
//! The process is started as `ws-controller <command> [args...]`. A bridge
//! calls `GET /ws-controller?token=...` and, if the token matches the
//! shared secret, receives `{"command": ..., "args": [...]}` describing the
//! subprocess to spawn. `GET /` redirects to the static landing page.
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients
//!     │
//!     ├── Handlers (api/)
//!     │
//!     ├── CommandService (service/)
//!     │
//!     └── StartupConfig + SharedSecret (domain/)
//! ```
//!
//! The shared-secret check is a plain string comparison and is not meant
//! as real authentication.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - GitHub REST adapters (repository host, identity)
//! - In-memory host for tests and mock mode
//! - CLI wiring (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;

//! # Application Layer
//!
//! Scan orchestration: the concurrency limiter, the tree walker and the
//! use cases coordinating provider fetches into aggregated results.

pub mod interfaces;
pub mod services;
pub mod use_cases;

pub use interfaces::*;
pub use services::*;
pub use use_cases::*;

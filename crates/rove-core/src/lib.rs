//! # rove-core
//!
//! Core types, settings, and error types for the rove router.
//! This crate has no dependency on the routing engine and provides the
//! foundation for the other crates in the workspace.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Router settings and global configuration
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;

// Re-export the most commonly used types at the crate root.
pub use error::{RoveError, RoveResult};
pub use settings::{Settings, SETTINGS};

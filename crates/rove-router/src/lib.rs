//! # rove-router
//!
//! The routing engine for rove: pattern compilation, path matching, and the
//! handler chain dispatcher.
//!
//! ## Modules
//!
//! - [`pattern`] - Pattern splitting, tokenization, and compilation
//! - [`route`] - A compiled route and its match operation
//! - [`context`] - The per-dispatch navigation context and parameter map
//! - [`router`] - The ordered handler registry and continuation walk
//!
//! # Examples
//!
//! ```
//! use rove_router::Router;
//!
//! let mut router = Router::new();
//! router
//!     .register("/user/:id", |ctx, _next| {
//!         assert_eq!(ctx.params.get("id"), Some("42"));
//!     })
//!     .unwrap();
//!
//! let ctx = router.dispatch("/user/42");
//! assert_eq!(ctx.params.get("id"), Some("42"));
//! ```

pub mod context;
pub mod pattern;
pub mod route;
pub mod router;

// Re-export the most commonly used types at the crate root.
pub use context::{Context, Params};
pub use pattern::{CompileOptions, CompiledPattern, Key};
pub use route::Route;
pub use router::{Handler, Next, Router};

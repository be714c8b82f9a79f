//! # rove
//!
//! A pattern-matching navigation router: compile path patterns, match
//! concrete paths, and walk an ordered chain of handlers with explicit
//! continuation semantics.
//!
//! This is the meta-crate that re-exports the sub-crates and provides one
//! default shared [`Router`] behind free functions, for applications that
//! want a single process-wide route table.
//!
//! # Examples
//!
//! ```
//! rove::register("/user/:id", |ctx, _next| {
//!     assert_eq!(ctx.params.get("id"), Some("42"));
//! })
//! .unwrap();
//!
//! let ctx = rove::dispatch("/user/42");
//! assert_eq!(ctx.params.get("id"), Some("42"));
//! ```
//!
//! Applications needing several independent route tables should construct
//! [`Router`] values directly instead of using the shared instance.

use std::sync::RwLock;

use once_cell::sync::Lazy;

/// Core types, settings, and error types.
pub use rove_core as core;

/// The routing engine: patterns, routes, contexts, and the dispatcher.
pub use rove_router as router;

/// Structured logging, re-exported so applications can emit events through
/// the same `tracing` version the router uses.
pub use tracing;

pub use rove_core::{RoveError, RoveResult, Settings, SETTINGS};
pub use rove_router::{CompileOptions, Context, Handler, Next, Params, Route, Router};

// Built from the global settings so that configuring SETTINGS before first
// use (base prefix, compile defaults) carries over to the shared instance.
static DEFAULT_ROUTER: Lazy<RwLock<Router>> =
    Lazy::new(|| RwLock::new(Router::from_settings(SETTINGS.get())));

/// Registers `handler` for `pattern` on the default shared router.
pub fn register<F>(pattern: &str, handler: F) -> RoveResult<()>
where
    F: Fn(&mut Context, Next<'_>) + Send + Sync + 'static,
{
    DEFAULT_ROUTER
        .write()
        .expect("default router lock poisoned")
        .register(pattern, handler)
}

/// Registers `handler` with explicit compile options on the default shared
/// router.
pub fn register_with<F>(pattern: &str, options: CompileOptions, handler: F) -> RoveResult<()>
where
    F: Fn(&mut Context, Next<'_>) + Send + Sync + 'static,
{
    DEFAULT_ROUTER
        .write()
        .expect("default router lock poisoned")
        .register_with(pattern, options, handler)
}

/// Dispatches `path` through the default shared router.
pub fn dispatch(path: &str) -> Context {
    DEFAULT_ROUTER
        .read()
        .expect("default router lock poisoned")
        .dispatch(path)
}

/// Returns the base path prefix of the default shared router.
pub fn base() -> String {
    DEFAULT_ROUTER
        .read()
        .expect("default router lock poisoned")
        .base()
        .to_string()
}

/// Sets the base path prefix of the default shared router.
pub fn set_base(path: impl Into<String>) {
    DEFAULT_ROUTER
        .write()
        .expect("default router lock poisoned")
        .set_base(path);
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_tracing_reexport() {
        assert_eq!(super::tracing::Level::INFO.to_string(), "INFO");
    }

    // The shared router is process-wide state, so everything touching it
    // lives in this one sequential test.
    #[test]
    fn test_default_router_round_trip() {
        static HITS: AtomicUsize = AtomicUsize::new(0);

        assert_eq!(super::base(), "");

        super::register("/widget/:id", |ctx, _next| {
            assert_eq!(ctx.params.get("id"), Some("3"));
            HITS.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        let ctx = super::dispatch("/widget/3");
        assert_eq!(HITS.load(Ordering::SeqCst), 1);
        assert_eq!(ctx.path, "/widget/3");

        super::set_base("/app");
        assert_eq!(super::base(), "/app");
        let ctx = super::dispatch("/widget/3");
        assert_eq!(ctx.canonical_path, "/app/widget/3");
        assert_eq!(HITS.load(Ordering::SeqCst), 2);
    }
}

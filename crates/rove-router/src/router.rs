//! The dispatcher: an ordered registry of route-bound handlers and the
//! continuation walk over them.
//!
//! A [`Router`] owns its registry, so applications can hold as many
//! independent routers as they need. Registration appends entries;
//! dispatch never mutates the registry, so a handler may safely trigger a
//! nested dispatch on the same router.
//!
//! ## The continuation contract
//!
//! Each matching handler receives the [`Next`] continuation for the not-yet-
//! visited tail of the registry. Calling [`Next::advance`] hands control to
//! the next matching entry; it consumes the continuation, so it can be
//! called at most once — the compiler enforces the contract. Dropping the
//! continuation without calling it halts the chain for this context: that is
//! the intended way for a handler to fully claim a route. Reaching the end
//! of the registry is silent, not an error.
//!
//! # Examples
//!
//! ```
//! use rove_router::Router;
//!
//! let mut router = Router::new();
//! router
//!     .register("/user/:id", |ctx, _next| {
//!         // Claims the route: the continuation is dropped unused.
//!         assert_eq!(ctx.params.get("id"), Some("42"));
//!     })
//!     .unwrap();
//!
//! let ctx = router.dispatch("/user/42");
//! assert_eq!(ctx.path, "/user/42");
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use rove_core::{RoveResult, Settings};

use crate::context::Context;
use crate::pattern::CompileOptions;
use crate::route::Route;

/// A route handler: receives the context being routed and the continuation
/// for the rest of the chain.
pub type Handler = Arc<dyn Fn(&mut Context, Next<'_>) + Send + Sync>;

/// One registry entry: a handler guarded by its route's match test.
struct Entry {
    route: Arc<Route>,
    handler: Handler,
}

/// An ordered registry of route-bound handlers.
pub struct Router {
    entries: Vec<Entry>,
    base: String,
    default_options: CompileOptions,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Creates an empty router with no base path and default compile options.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            base: String::new(),
            default_options: CompileOptions::default(),
        }
    }

    /// Creates an empty router with the given base path prefix.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ..Self::new()
        }
    }

    /// Creates an empty router configured from settings: the base prefix and
    /// the compile options [`register`](Self::register) uses.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            entries: Vec::new(),
            base: settings.base.clone(),
            default_options: CompileOptions::from(settings),
        }
    }

    /// Returns the base path prefix.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Sets the base path prefix used by subsequent dispatches.
    pub fn set_base(&mut self, base: impl Into<String>) {
        self.base = base.into();
    }

    /// Returns the number of registered entries (one per handler).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no handler has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers `handler` for `pattern` with this router's default compile
    /// options.
    ///
    /// # Errors
    ///
    /// Fails when the pattern cannot be compiled; the registry is unchanged.
    pub fn register<F>(&mut self, pattern: &str, handler: F) -> RoveResult<()>
    where
        F: Fn(&mut Context, Next<'_>) + Send + Sync + 'static,
    {
        self.register_with(pattern, self.default_options, handler)
    }

    /// Registers `handler` for `pattern` with explicit compile options.
    pub fn register_with<F>(
        &mut self,
        pattern: &str,
        options: CompileOptions,
        handler: F,
    ) -> RoveResult<()>
    where
        F: Fn(&mut Context, Next<'_>) + Send + Sync + 'static,
    {
        self.register_all(pattern, options, vec![Arc::new(handler)])
    }

    /// Registers several handlers for one pattern.
    ///
    /// The pattern is compiled once; every handler gets its own registry
    /// entry sharing the compiled route, in the order given.
    pub fn register_all(
        &mut self,
        pattern: &str,
        options: CompileOptions,
        handlers: Vec<Handler>,
    ) -> RoveResult<()> {
        let route = Arc::new(Route::with_options(pattern, options)?);
        debug!(
            pattern,
            handlers = handlers.len(),
            registry_len = self.entries.len() + handlers.len(),
            "registered route"
        );
        for handler in handlers {
            self.entries.push(Entry {
                route: Arc::clone(&route),
                handler,
            });
        }
        Ok(())
    }

    /// Dispatches `raw_path` through the chain.
    ///
    /// Builds a fresh [`Context`] from the path and this router's base
    /// prefix, walks the registry, and returns the context with whatever
    /// parameters matching routes filled in. A path no route claims returns
    /// silently with empty params.
    pub fn dispatch(&self, raw_path: &str) -> Context {
        let mut ctx = Context::new(raw_path, &self.base);
        self.dispatch_context(&mut ctx);
        ctx
    }

    /// Walks the chain for a caller-constructed context (e.g. one carrying a
    /// title or re-routed mid-flight).
    pub fn dispatch_context(&self, ctx: &mut Context) {
        debug!(path = %ctx.path, registry_len = self.entries.len(), "dispatching");
        Next {
            entries: &self.entries,
        }
        .advance(ctx);
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("entries", &self.entries.len())
            .field("base", &self.base)
            .finish()
    }
}

/// The continuation over the not-yet-visited tail of a registry.
///
/// Consuming [`advance`](Next::advance) makes "at most once" a compile-time
/// guarantee; dropping the continuation halts the chain for this dispatch.
pub struct Next<'a> {
    entries: &'a [Entry],
}

impl Next<'_> {
    /// Hands control to the next entry whose route matches the context.
    ///
    /// Entries that do not match are skipped in a loop, without growing the
    /// call stack; only an explicit handler-to-handler hand-off nests. When
    /// no entry remains the walk ends silently.
    pub fn advance(mut self, ctx: &mut Context) {
        while let Some((entry, rest)) = self.entries.split_first() {
            self.entries = rest;
            if entry.route.matches(&ctx.path, &mut ctx.params) {
                debug!(pattern = entry.route.pattern(), path = %ctx.path, "route matched");
                (entry.handler)(ctx, Next { entries: rest });
                return;
            }
        }
        debug!(path = %ctx.path, "chain exhausted");
    }
}

impl fmt::Debug for Next<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("remaining", &self.entries.len())
            .finish()
    }
}

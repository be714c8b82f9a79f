//! Per-dispatch navigation context and extracted parameters.
//!
//! A [`Context`] is the value object one dispatch call routes: the path being
//! matched, its derived pieces, and the [`Params`] map that successful
//! matches fill in. It is created fresh per dispatch, mutated only by
//! matching routes during that dispatch, and never persisted.

use std::collections::HashMap;

/// Parameters extracted from a matched path.
///
/// Named captures land in a name-to-value map; unnamed captures (wildcards,
/// inline-regex groups, catch-all remainders) land in a positional list.
///
/// Write policy across multiple matching routes of one dispatch: named
/// parameters are first-writer-wins, positional captures append in capture
/// order. A positional slot holds `None` when its capture group did not
/// participate in the match, keeping slot indexes aligned per match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    named: HashMap<String, String>,
    positional: Vec<Option<String>>,
}

impl Params {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the named parameter `name`, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }

    /// Returns `true` if the named parameter `name` is set.
    pub fn contains(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    /// Sets `name` to `value` unless an earlier route already wrote it.
    pub fn insert_first(&mut self, name: &str, value: String) {
        self.named.entry(name.to_string()).or_insert(value);
    }

    /// Appends one positional capture (`None` for a non-participating group).
    pub fn push_positional(&mut self, value: Option<String>) {
        self.positional.push(value);
    }

    /// Returns the positional captures in capture order.
    pub fn positional(&self) -> &[Option<String>] {
        &self.positional
    }

    /// Iterates over the named parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.named.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` if no parameter of either kind has been set.
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.positional.is_empty()
    }
}

/// The per-dispatch navigation context.
///
/// # Examples
///
/// ```
/// use rove_router::Context;
///
/// let ctx = Context::new("/blog/post/3?draft=1", "/blog");
/// assert_eq!(ctx.canonical_path, "/blog/post/3?draft=1");
/// assert_eq!(ctx.path, "/post/3?draft=1");
/// assert_eq!(ctx.pathname, "/blog/post/3");
/// assert_eq!(ctx.querystring, "draft=1");
/// ```
#[derive(Debug, Clone)]
pub struct Context {
    /// The full path including the base prefix and query string.
    pub canonical_path: String,
    /// The routing key: the canonical path with the base prefix stripped.
    /// Defaults to `/` when stripping leaves nothing.
    pub path: String,
    /// The canonical path up to (not including) the first `?`.
    pub pathname: String,
    /// Everything after the first `?`, or empty when there is none.
    pub querystring: String,
    /// The page title captured at construction time. Opaque pass-through;
    /// never recomputed by the router.
    pub title: String,
    /// Parameters filled in by matching routes during this dispatch.
    pub params: Params,
}

impl Context {
    /// Creates a context for `raw_path` under the given base prefix, with an
    /// empty title.
    pub fn new(raw_path: &str, base: &str) -> Self {
        Self::with_title(raw_path, base, "")
    }

    /// Creates a context for `raw_path` under the given base prefix.
    ///
    /// An absolute `raw_path` that does not already carry the base prefix is
    /// prefixed with it; the routing key [`path`](Self::path) always has the
    /// prefix stripped back off.
    pub fn with_title(raw_path: &str, base: &str, title: &str) -> Self {
        let canonical_path = if raw_path.starts_with('/') && !raw_path.starts_with(base) {
            format!("{base}{raw_path}")
        } else {
            raw_path.to_string()
        };

        let (pathname, querystring) = match canonical_path.split_once('?') {
            Some((before, after)) => (before.to_string(), after.to_string()),
            None => (canonical_path.clone(), String::new()),
        };

        let stripped = canonical_path
            .strip_prefix(base)
            .unwrap_or(&canonical_path);
        let path = if stripped.is_empty() {
            "/".to_string()
        } else {
            stripped.to_string()
        };

        Self {
            canonical_path,
            path,
            pathname,
            querystring,
            title: title.to_string(),
            params: Params::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_no_base() {
        let ctx = Context::new("/user/42", "");
        assert_eq!(ctx.canonical_path, "/user/42");
        assert_eq!(ctx.path, "/user/42");
        assert_eq!(ctx.pathname, "/user/42");
        assert_eq!(ctx.querystring, "");
        assert_eq!(ctx.title, "");
        assert!(ctx.params.is_empty());
    }

    #[test]
    fn test_context_prepends_missing_base() {
        let ctx = Context::new("/user/42", "/app");
        assert_eq!(ctx.canonical_path, "/app/user/42");
        assert_eq!(ctx.path, "/user/42");
    }

    #[test]
    fn test_context_keeps_existing_base() {
        let ctx = Context::new("/app/user/42", "/app");
        assert_eq!(ctx.canonical_path, "/app/user/42");
        assert_eq!(ctx.path, "/user/42");
    }

    #[test]
    fn test_context_path_defaults_to_root() {
        let ctx = Context::new("/app", "/app");
        assert_eq!(ctx.path, "/");
    }

    #[test]
    fn test_context_query_split() {
        let ctx = Context::new("/search?q=rust&page=2", "");
        assert_eq!(ctx.pathname, "/search");
        assert_eq!(ctx.querystring, "q=rust&page=2");
        // The routing key keeps the query string; matching strips it.
        assert_eq!(ctx.path, "/search?q=rust&page=2");
    }

    #[test]
    fn test_context_with_title() {
        let ctx = Context::with_title("/", "", "Home");
        assert_eq!(ctx.title, "Home");
    }

    #[test]
    fn test_params_first_writer_wins() {
        let mut params = Params::new();
        params.insert_first("id", "1".to_string());
        params.insert_first("id", "2".to_string());
        assert_eq!(params.get("id"), Some("1"));
    }

    #[test]
    fn test_params_positional_appends() {
        let mut params = Params::new();
        params.push_positional(Some("a".to_string()));
        params.push_positional(None);
        params.push_positional(Some("b".to_string()));
        assert_eq!(params.positional().len(), 3);
        assert_eq!(params.positional()[0].as_deref(), Some("a"));
        assert!(params.positional()[1].is_none());
    }

    #[test]
    fn test_params_iter() {
        let mut params = Params::new();
        params.insert_first("a", "1".to_string());
        assert_eq!(params.iter().count(), 1);
        assert!(params.contains("a"));
        assert!(!params.contains("b"));
    }
}

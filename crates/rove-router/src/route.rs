//! A single registered route: one compiled pattern plus its match operation.

use percent_encoding::percent_decode_str;
use tracing::debug;

use rove_core::RoveResult;

use crate::context::Params;
use crate::pattern::{compile, CompileOptions, CompiledPattern, Key};

/// One compiled route. Immutable after construction; registration wraps it in
/// an `Arc` so every handler bound to the same pattern shares one compile.
#[derive(Debug, Clone)]
pub struct Route {
    pattern: String,
    compiled: CompiledPattern,
}

impl Route {
    /// Compiles `pattern` with default options (case-insensitive, lenient
    /// trailing slash).
    pub fn new(pattern: &str) -> RoveResult<Self> {
        Self::with_options(pattern, CompileOptions::default())
    }

    /// Compiles `pattern` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`RoveError::PatternCompile`](rove_core::RoveError) when the
    /// pattern cannot be lowered to a matcher.
    pub fn with_options(pattern: &str, options: CompileOptions) -> RoveResult<Self> {
        let compiled = compile(pattern, options)?;
        debug!(
            pattern,
            keys = compiled.keys().len(),
            matcher = compiled.regex().as_str(),
            "compiled route pattern"
        );
        Ok(Self {
            pattern: pattern.to_string(),
            compiled,
        })
    }

    /// Returns the original pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the ordered key schema of the compiled pattern.
    pub fn keys(&self) -> &[Option<Key>] {
        self.compiled.keys()
    }

    /// Tests `path` against this route; on success, fills `params`.
    ///
    /// The query string (everything from the first `?`) is stripped before
    /// matching. On a match every participating capture is percent-decoded
    /// up front; if any capture fails to decode the whole match is rejected
    /// and `params` is left untouched — partially-decoded parameters are
    /// never committed. Named captures are written first-writer-wins;
    /// unnamed captures append to the positional list in capture order.
    pub fn matches(&self, path: &str, params: &mut Params) -> bool {
        let pathname = path.split_once('?').map_or(path, |(before, _)| before);

        let Some(caps) = self.compiled.regex().captures(pathname) else {
            return false;
        };

        let mut decoded: Vec<Option<String>> = Vec::with_capacity(caps.len() - 1);
        for i in 1..caps.len() {
            match caps.get(i) {
                Some(m) => match percent_decode_str(m.as_str()).decode_utf8() {
                    Ok(value) => decoded.push(Some(value.into_owned())),
                    Err(_) => {
                        debug!(
                            pattern = %self.pattern,
                            capture = m.as_str(),
                            "capture is not valid percent-encoded UTF-8; rejecting match"
                        );
                        return false;
                    }
                },
                None => decoded.push(None),
            }
        }

        for (slot, value) in self.compiled.keys().iter().zip(decoded) {
            match slot {
                Some(key) => {
                    if let Some(value) = value {
                        params.insert_first(&key.name, value);
                    }
                }
                None => params.push_positional(value),
            }
        }

        true
    }
}

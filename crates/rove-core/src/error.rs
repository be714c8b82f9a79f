//! Core error types for the rove router.
//!
//! This module provides the [`RoveError`] enum covering pattern compilation
//! failures, configuration errors, and IO errors, together with the
//! [`RoveResult`] alias used across the workspace.

use thiserror::Error;

/// The primary error type for the rove router.
///
/// Pattern compilation errors are raised at registration time and are fatal
/// to that registration call. A path that matches no route is *not* an error
/// anywhere in this crate family; neither is a dispatch that exhausts the
/// registry without any handler claiming it.
#[derive(Error, Debug)]
pub enum RoveError {
    // ── Pattern compilation ──────────────────────────────────────────

    /// A path pattern could not be lowered to a matcher. Raised for
    /// unbalanced inline-regex parentheses and for fragments the regex
    /// engine rejects. The offending pattern is never silently truncated.
    #[error("Cannot compile pattern '{pattern}': {message}")]
    PatternCompile {
        /// The pattern string as passed to registration.
        pattern: String,
        /// What went wrong while compiling it.
        message: String,
    },

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred (e.g. while reading a settings file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RoveError {
    /// Creates a [`RoveError::PatternCompile`] for the given pattern.
    pub fn pattern_compile(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PatternCompile {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

/// A convenience type alias for `Result<T, RoveError>`.
pub type RoveResult<T> = Result<T, RoveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_compile_display() {
        let err = RoveError::pattern_compile("/a/(b", "unbalanced parenthesis");
        assert_eq!(
            err.to_string(),
            "Cannot compile pattern '/a/(b': unbalanced parenthesis"
        );
    }

    #[test]
    fn test_configuration_display() {
        let err = RoveError::Configuration("bad base path".into());
        assert_eq!(err.to_string(), "Configuration error: bad base path");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RoveError = io_err.into();
        assert!(err.to_string().contains("file missing"));
    }
}

//! Settings for the rove router.
//!
//! This module provides the [`Settings`] struct, which holds router
//! configuration (base path, default compile options, logging), and
//! [`LazySettings`], a globally-accessible, lazily-initialized settings
//! instance. Settings can be loaded from a TOML file with environment
//! variable overrides applied on top.
//!
//! ## Loading order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment variable mapping
//!
//! | Env var            | Setting          |
//! |--------------------|------------------|
//! | `ROVE_BASE`        | `base`           |
//! | `ROVE_DEBUG`       | `debug`          |
//! | `ROVE_LOG_LEVEL`   | `log_level`      |

use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{RoveError, RoveResult};

/// The complete set of router settings.
///
/// # Examples
///
/// ```
/// use rove_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(settings.base, "");
/// assert!(!settings.case_sensitive);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled (affects log formatting).
    pub debug: bool,
    /// The base path prefix stripped from and prepended to routed paths.
    pub base: String,

    // ── Default compile options ──────────────────────────────────────

    /// Whether patterns match case-sensitively by default.
    pub case_sensitive: bool,
    /// Whether a trailing slash is significant by default.
    pub strict_slash: bool,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            base: String::new(),
            case_sensitive: false,
            strict_slash: false,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from a TOML string.
    ///
    /// # Examples
    ///
    /// ```
    /// use rove_core::settings::Settings;
    ///
    /// let settings = Settings::from_toml_str("base = \"/app\"").unwrap();
    /// assert_eq!(settings.base, "/app");
    /// ```
    pub fn from_toml_str(source: &str) -> RoveResult<Self> {
        toml::from_str(source)
            .map_err(|e| RoveError::Configuration(format!("Invalid settings TOML: {e}")))
    }

    /// Loads settings from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> RoveResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Loads settings from a TOML file, then applies environment overrides.
    pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> RoveResult<Self> {
        let mut settings = Self::from_toml_file(path)?;
        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Applies `ROVE_*` environment variable overrides to these settings.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base) = std::env::var("ROVE_BASE") {
            self.base = base;
        }
        if let Ok(debug) = std::env::var("ROVE_DEBUG") {
            self.debug = matches!(debug.as_str(), "1" | "true" | "yes");
        }
        if let Ok(level) = std::env::var("ROVE_LOG_LEVEL") {
            self.log_level = level;
        }
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup to set the
/// settings; [`get`](LazySettings::get) falls back to defaults when nothing
/// has been configured.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the global settings. Must be called at most once.
    ///
    /// # Panics
    ///
    /// Panics if settings have already been configured.
    pub fn configure(&self, settings: Settings) {
        self.inner
            .set(settings)
            .expect("Settings have already been configured");
    }

    /// Returns the configured settings, or defaults when unconfigured.
    pub fn get(&self) -> &Settings {
        self.inner.get_or_init(Settings::default)
    }
}

/// The global settings instance.
pub static SETTINGS: LazySettings = LazySettings::new();

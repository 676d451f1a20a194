//! Runtime configuration.
//!
//! Settings come from three layers, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. An optional JSON file at `<config_dir>/folio/config.json`
//! 3. `FOLIO_*` environment variables
//!
//! Environment variables always win so a one-off
//! `FOLIO_SKIP_BOOT=1 folio` works regardless of the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration for a folio run.
///
/// Use the builder pattern to customize behavior.
///
/// # Example
///
/// ```ignore
/// use folio::config::FolioConfig;
///
/// let config = FolioConfig::default()
///     .with_skip_boot(true)
///     .with_reduced_motion(true);
/// ```
#[derive(Debug, Clone)]
pub struct FolioConfig {
    /// Skip the boot sequence and land directly on the main screen
    pub skip_boot: bool,
    /// Snap carousel rotation instead of easing it
    pub reduced_motion: bool,
    /// Override path for the content file (None = compiled-in content)
    pub content_path: Option<PathBuf>,
    /// Tracing filter for the log file; None disables file logging
    pub log_filter: Option<String>,
    /// Capture mouse events (disable for terminals with broken reporting)
    pub mouse_capture: bool,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            skip_boot: false,
            reduced_motion: false,
            content_path: None,
            log_filter: None,
            mouse_capture: true,
        }
    }
}

/// On-disk shape of `config.json`. Every field is optional so a partial
/// file only overrides what it names.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    skip_boot: Option<bool>,
    reduced_motion: Option<bool>,
    content: Option<PathBuf>,
    log: Option<String>,
    mouse: Option<bool>,
}

impl FolioConfig {
    /// Create a new FolioConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to skip the boot sequence.
    pub fn with_skip_boot(mut self, skip: bool) -> Self {
        self.skip_boot = skip;
        self
    }

    /// Set whether to snap carousel motion instead of easing.
    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    /// Set an override path for the content file.
    pub fn with_content_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_path = Some(path.into());
        self
    }

    /// Set the tracing filter for file logging.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Set whether to capture mouse events.
    pub fn with_mouse_capture(mut self, capture: bool) -> Self {
        self.mouse_capture = capture;
        self
    }

    /// Load configuration from the default file location plus environment.
    pub fn load() -> Self {
        let file = default_config_path()
            .and_then(|p| Self::read_file(&p))
            .unwrap_or_default();
        Self::default().apply_file(file).apply_env()
    }

    /// Load configuration from a specific file path plus environment.
    /// Missing or malformed files fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let file = Self::read_file(path).unwrap_or_default();
        Self::default().apply_file(file).apply_env()
    }

    fn read_file(path: &Path) -> Option<ConfigFile> {
        let raw = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config file");
                None
            }
        }
    }

    fn apply_file(mut self, file: ConfigFile) -> Self {
        if let Some(skip) = file.skip_boot {
            self.skip_boot = skip;
        }
        if let Some(reduced) = file.reduced_motion {
            self.reduced_motion = reduced;
        }
        if let Some(path) = file.content {
            self.content_path = Some(path);
        }
        if let Some(filter) = file.log {
            self.log_filter = Some(filter);
        }
        if let Some(mouse) = file.mouse {
            self.mouse_capture = mouse;
        }
        self
    }

    /// Apply `FOLIO_*` environment variables on top of the current values.
    pub fn apply_env(mut self) -> Self {
        if let Some(flag) = env_flag("FOLIO_SKIP_BOOT") {
            self.skip_boot = flag;
        }
        if let Some(flag) = env_flag("FOLIO_REDUCED_MOTION") {
            self.reduced_motion = flag;
        }
        if let Ok(path) = std::env::var("FOLIO_CONTENT") {
            if !path.is_empty() {
                self.content_path = Some(PathBuf::from(path));
            }
        }
        if let Ok(filter) = std::env::var("FOLIO_LOG") {
            if !filter.is_empty() {
                // FOLIO_LOG=1 is shorthand for debug-level logging
                self.log_filter = Some(if filter == "1" {
                    "folio=debug".to_string()
                } else {
                    filter
                });
            }
        }
        if let Some(flag) = env_flag("FOLIO_NO_MOUSE") {
            self.mouse_capture = !flag;
        }
        self
    }
}

/// Read an environment variable as a boolean flag.
/// Returns None when unset, Some(false) for "0"/"false", Some(true) otherwise.
fn env_flag(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    Some(value != "0" && !value.eq_ignore_ascii_case("false"))
}

/// Path of the optional config file: `<config_dir>/folio/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("folio").join("config.json"))
}

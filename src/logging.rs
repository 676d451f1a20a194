//! File logging setup.
//!
//! The TUI owns stdout, so logs go to `<data_dir>/folio/folio.log` and
//! only when a filter is configured (`FOLIO_LOG` or the config file).
//! Without a filter no subscriber is installed and the tracing macros
//! are no-ops.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the file subscriber if a filter is configured.
///
/// Returns the log file path when logging was enabled.
pub fn init(filter: Option<&str>) -> Result<Option<PathBuf>> {
    let Some(filter) = filter else {
        return Ok(None);
    };

    let path = log_path().ok_or_else(|| eyre!("no data directory available for the log file"))?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("folio=debug"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(path = %path.display(), "file logging enabled");
    Ok(Some(path))
}

/// Location of the log file: `<data_dir>/folio/folio.log`.
pub fn log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("folio").join("folio.log"))
}

//! File logging setup.
//!
//! Terminal applications cannot log to stdout without corrupting the UI, so
//! all diagnostics go to a file under the user data directory. Logging is
//! off unless enabled in the configuration.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::path::PathBuf;

use crate::config::LoggingConfig;

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Where log records are written.
pub fn log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("gardenist").join("gardenist.log"))
}

/// Install the global log dispatcher.
///
/// Safe to call more than once; only the first call installs anything.
/// Does nothing when logging is disabled in the configuration.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = config.level_filter();
    LOGGER_INIT.get_or_try_init(|| -> Result<()> {
        let path = log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ));
            })
            .level(level)
            .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
            .apply()
            .context("Failed to install logger")?;

        Ok(())
    })?;

    Ok(())
}

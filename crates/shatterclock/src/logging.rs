//! Optional file logging.
//!
//! Stdout carries the animation, so nothing is logged to the terminal. Set
//! `SHATTERCLOCK_LOG` to an env-filter directive (e.g. `debug`) to write a
//! log file in the data directory instead.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::eyre;
use shatter_config::{APP_NAME, Settings};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SHATTERCLOCK_LOG";

/// Install the file subscriber if logging was requested. Returns the log
/// file path when it was.
pub fn init() -> color_eyre::Result<Option<PathBuf>> {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return Ok(None);
    };
    let filter = EnvFilter::try_new(directives)?;

    let dir = Settings::data_dir()?;
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{APP_NAME}.log"));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {e}"))?;

    Ok(Some(path))
}

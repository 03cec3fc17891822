//! Configuration for shatterclock.
//!
//! Settings live in `config.toml` under the platform config directory. The
//! file is optional and every field falls back to its default, so a missing
//! file or a partial one both work.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use shatter_core::SpinSchedule;
use shatter_debris::Physics;

/// Application name used for config and data directories.
pub const APP_NAME: &str = "shatterclock";

/// Config file name inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading or saving settings.
#[derive(Debug)]
pub enum ConfigError {
    /// The platform has no home directory to derive paths from.
    NoProjectDirs,
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    /// The file parsed but holds values the animation cannot run with.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoProjectDirs => write!(f, "could not resolve project directories"),
            ConfigError::Io(e) => write!(f, "config i/o error: {e}"),
            ConfigError::Parse(e) => write!(f, "invalid config file: {e}"),
            ConfigError::Serialize(e) => write!(f, "could not serialize config: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid setting: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// Frame pacing of the spinning clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinSettings {
    /// Delay between frames during the first revolution, in milliseconds.
    pub initial_speed_ms: u64,
    /// Fastest delay between frames, in milliseconds.
    pub min_speed_ms: u64,
    /// Delay reduction per revolution, in milliseconds.
    pub acceleration_ms: u64,
    /// Revolutions at full speed before the clock breaks apart.
    pub floor_spins: u32,
}

impl Default for SpinSettings {
    fn default() -> Self {
        let schedule = SpinSchedule::default();
        Self {
            initial_speed_ms: schedule.initial_speed.as_millis() as u64,
            min_speed_ms: schedule.min_speed.as_millis() as u64,
            acceleration_ms: schedule.acceleration.as_millis() as u64,
            floor_spins: schedule.floor_spins,
        }
    }
}

impl SpinSettings {
    pub fn schedule(&self) -> SpinSchedule {
        SpinSchedule {
            initial_speed: Duration::from_millis(self.initial_speed_ms),
            min_speed: Duration::from_millis(self.min_speed_ms),
            acceleration: Duration::from_millis(self.acceleration_ms),
            floor_spins: self.floor_spins,
        }
    }
}

/// Physics of the break-apart animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebrisSettings {
    /// Downward acceleration, in cells per tick squared.
    pub gravity: f64,
    /// Initial outward speed of each piece, in cells per tick.
    pub burst_speed: f64,
    /// Delay between simulation frames, in milliseconds.
    pub tick_ms: u64,
}

impl Default for DebrisSettings {
    fn default() -> Self {
        let physics = Physics::default();
        Self {
            gravity: physics.gravity,
            burst_speed: physics.burst_speed,
            tick_ms: physics.tick.as_millis() as u64,
        }
    }
}

impl DebrisSettings {
    pub fn physics(&self) -> Physics {
        Physics {
            gravity: self.gravity,
            burst_speed: self.burst_speed,
            tick: Duration::from_millis(self.tick_ms),
        }
    }
}

/// All user-tunable settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub spin: SpinSettings,
    pub debris: DebrisSettings,
}

impl Settings {
    /// Path of the config file for the current user.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("", "", APP_NAME).ok_or(ConfigError::NoProjectDirs)?;
        Ok(dirs.config_dir().join(CONFIG_FILE))
    }

    /// Directory for runtime output such as log files.
    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("", "", APP_NAME).ok_or(ConfigError::NoProjectDirs)?;
        Ok(dirs.data_local_dir().to_path_buf())
    }

    /// Load the user's settings, or defaults when no config file exists or
    /// the platform has no config directory.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(ConfigError::NoProjectDirs) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Load settings from `path`, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(contents).map_err(ConfigError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Reject values the animation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let spin = &self.spin;
        if spin.min_speed_ms == 0 || spin.initial_speed_ms == 0 {
            return Err(ConfigError::Invalid("frame delays must be non-zero".into()));
        }
        if spin.min_speed_ms > spin.initial_speed_ms {
            return Err(ConfigError::Invalid(format!(
                "min_speed_ms ({}) exceeds initial_speed_ms ({})",
                spin.min_speed_ms, spin.initial_speed_ms
            )));
        }
        if spin.acceleration_ms == 0 && spin.min_speed_ms < spin.initial_speed_ms {
            return Err(ConfigError::Invalid(
                "acceleration_ms must be non-zero to reach min_speed_ms".into(),
            ));
        }

        let debris = &self.debris;
        if debris.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be non-zero".into()));
        }
        if !debris.gravity.is_finite() || debris.gravity <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "gravity must be positive, got {}",
                debris.gravity
            )));
        }
        if !debris.burst_speed.is_finite() || debris.burst_speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "burst_speed must be non-negative, got {}",
                debris.burst_speed
            )));
        }
        Ok(())
    }
}

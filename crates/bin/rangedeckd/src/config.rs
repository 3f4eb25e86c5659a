//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `rangedeck.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use rangedeck_app::timing::PanelTiming;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device settings.
    pub device: DeviceConfig,
    /// Panel timing settings.
    pub timing: TimingConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Which rig the panel drives.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Base address of the rig's HTTP API.
    pub address: String,
    /// Drive a simulated rig instead of the HTTP API.
    pub virtual_rig: bool,
}

/// Panel delays, all in milliseconds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Cadence of the status poller.
    pub poll_interval_ms: u64,
    /// How long a flashed notice stays on the banner.
    pub notice_ttl_ms: u64,
    /// How long the loading cover stays fully visible.
    pub cover_hold_ms: u64,
    /// How long the cover fade-out runs.
    pub cover_fade_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `rangedeck.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("rangedeck.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("RANGEDECK_DEVICE_ADDRESS") {
            self.device.address = val;
        }
        if let Ok(val) = std::env::var("RANGEDECK_VIRTUAL") {
            if let Ok(flag) = val.parse() {
                self.device.virtual_rig = flag;
            }
        }
        if let Ok(val) = std::env::var("RANGEDECK_POLL_MS") {
            if let Ok(ms) = val.parse() {
                self.timing.poll_interval_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("RANGEDECK_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be non-zero".to_string(),
            ));
        }
        if !self.device.virtual_rig && self.device.address.is_empty() {
            return Err(ConfigError::Validation(
                "device address must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Timing knobs in the shape the app layer expects.
    #[must_use]
    pub fn panel_timing(&self) -> PanelTiming {
        PanelTiming {
            poll_period: Duration::from_millis(self.timing.poll_interval_ms),
            notice_ttl: Duration::from_millis(self.timing.notice_ttl_ms),
            cover_hold: Duration::from_millis(self.timing.cover_hold_ms),
            cover_fade: Duration::from_millis(self.timing.cover_fade_ms),
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            address: "http://192.168.1.100".to_string(),
            virtual_rig: false,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 800,
            notice_ttl_ms: 3000,
            cover_hold_ms: 2000,
            cover_fade_ms: 500,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "rangedeckd=info,rangedeck=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

//! Configuration management
//!
//! Optional TOML file holding the command station address and drive
//! defaults. CLI flags override file values.

use crate::action::SpeedSteps;
use crate::constants::{DEFAULT_STATION_HOST, DEFAULT_STATION_PORT};
use crate::error::{Result, Z21Error};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

// =============================================================================
// Application Configuration
// =============================================================================

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub station: StationConfig,
    pub drive: DriveConfig,
}

/// Command station endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    /// Host name or IP of the command station
    pub host: String,
    /// UDP port of the command station
    pub port: u16,
}

/// Defaults for loco drive commands
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// Speed step mode used when `--steps` is not given
    pub step_mode: SpeedSteps,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_STATION_HOST.to_string(),
            port: DEFAULT_STATION_PORT,
        }
    }
}

impl Config {
    /// Reject values that can never reach a station
    pub fn validate(&self) -> Result<()> {
        if self.station.host.trim().is_empty() {
            return Err(Z21Error::ConfigValidation {
                field: "station.host",
                reason: "must not be empty".into(),
            });
        }
        if self.station.port == 0 {
            return Err(Z21Error::ConfigValidation {
                field: "station.port",
                reason: "must not be 0".into(),
            });
        }
        Ok(())
    }
}

/// Load and validate a config file, failing on any problem
pub fn load_strict(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| Z21Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| Z21Error::ConfigValidation {
        field: "config",
        reason: format!("invalid TOML in {}: {}", path.display(), e),
    })?;

    config.validate()?;
    Ok(config)
}

/// Load config from file, falling back to defaults
pub fn load(path: &Path) -> Config {
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Config::default();
    }

    match load_strict(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}, using defaults", e);
            Config::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

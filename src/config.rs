//! Service configuration
//!
//! Settings are read from an optional TOML file and then overridden by a
//! couple of environment variables. Every field has a default, so running
//! without a config file is the normal case.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::page::MissionError;

/// Environment variable naming the config file
pub const CONFIG_PATH_VAR: &str = "MISSION_CONFIG";
/// Config file used when `MISSION_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "./mission.toml";

/// Top-level service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    /// Address the web server binds to
    pub bind_address: String,
    /// Port the web server listens on
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Optional starship model shown on the scene pages
    pub model_path: PathBuf,
    /// Maximum number of live mission sessions
    pub session_capacity: usize,
    /// Choreography durations
    pub timings: Timings,
}

/// Durations of every timed phase, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Landing: board pressed until the wall latches
    pub wall_latch_ms: u64,
    /// Landing: latched until the wall departs and the hangar is requested
    pub wall_depart_ms: u64,
    /// Landing: departing until the wall is cleared away
    pub wall_clear_ms: u64,
    /// Overlap window while the next view renders behind the landing page
    pub overlay_ms: u64,
    /// Launch station countdown start value
    pub countdown_from: u32,
    /// Launch station countdown tick
    pub countdown_tick_ms: u64,
    /// Launch station blast-off animation
    pub blast_off_ms: u64,
    /// Moon: flag planted until the ship boosts away
    pub flag_hold_ms: u64,
    /// Moon: boost-away animation
    pub boost_ms: u64,
    /// Mars: descent animation
    pub descent_ms: u64,
    /// Completion: badge fade before the works cited list
    pub fade_ms: u64,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: PathBuf::from("./static"),
            model_path: PathBuf::from("./static/starship.glb"),
            session_capacity: 256,
            timings: Timings::default(),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            wall_latch_ms: 1000,
            wall_depart_ms: 800,
            wall_clear_ms: 600,
            overlay_ms: 600,
            countdown_from: 3,
            countdown_tick_ms: 1000,
            blast_off_ms: 2000,
            flag_hold_ms: 1500,
            boost_ms: 2000,
            descent_ms: 3000,
            fade_ms: 500,
        }
    }
}

impl Timings {
    pub fn wall_latch(&self) -> Duration {
        Duration::from_millis(self.wall_latch_ms)
    }

    pub fn wall_depart(&self) -> Duration {
        Duration::from_millis(self.wall_depart_ms)
    }

    pub fn wall_clear(&self) -> Duration {
        Duration::from_millis(self.wall_clear_ms)
    }

    pub fn overlay(&self) -> Duration {
        Duration::from_millis(self.overlay_ms)
    }

    pub fn countdown_tick(&self) -> Duration {
        Duration::from_millis(self.countdown_tick_ms)
    }

    pub fn blast_off(&self) -> Duration {
        Duration::from_millis(self.blast_off_ms)
    }

    pub fn flag_hold(&self) -> Duration {
        Duration::from_millis(self.flag_hold_ms)
    }

    pub fn boost(&self) -> Duration {
        Duration::from_millis(self.boost_ms)
    }

    pub fn descent(&self) -> Duration {
        Duration::from_millis(self.descent_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl MissionConfig {
    /// Load the configuration from the file named by `MISSION_CONFIG`
    /// (or `./mission.toml`), then apply environment overrides.
    pub fn load() -> Result<Self, MissionError> {
        let path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(Path::new(&path))?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, MissionError> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|e| {
            MissionError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&raw)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self, MissionError> {
        toml::from_str(raw).map_err(|e| MissionError::Config(format!("Invalid config: {}", e)))
    }

    fn apply_env_overrides(&mut self) -> Result<(), MissionError> {
        if let Ok(bind) = env::var("MISSION_BIND") {
            self.bind_address = bind;
        }
        if let Ok(port) = env::var("MISSION_PORT") {
            self.port = port
                .parse()
                .map_err(|_| MissionError::Config(format!("MISSION_PORT is not a port: {}", port)))?;
        }
        Ok(())
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<(), MissionError> {
        if self.session_capacity == 0 {
            return Err(MissionError::Config(
                "session_capacity must be at least 1".to_string(),
            ));
        }
        if self.timings.countdown_tick_ms == 0 {
            return Err(MissionError::Config(
                "countdown_tick_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Address string handed to the HTTP server
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

//! Configuration structs with defaults and TOML persistence.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use spaceapps_core::{AnimationSpeed, BackgroundLayers, Rgba};
use tracing::{info, warn};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Background animation settings.
    pub background: BackgroundConfig,
    /// Logging settings.
    pub log: LogConfig,
}

/// Background animation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Number of stars.
    pub star_count: usize,
    /// Number of nebula blobs.
    pub blob_count: usize,
    /// Number of twinkling points behind the FAQ.
    pub twinkle_count: usize,
    /// Fixed random seed; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    /// Layers drawn at start-up.
    pub layers: BackgroundLayers,
    /// Frame cadence at start-up.
    pub speed: AnimationSpeed,
    /// Virtual pixels per terminal column.
    pub cell_width: u16,
    /// Virtual pixels per terminal row.
    pub cell_height: u16,
    /// Star spawn ranges.
    pub stars: StarsConfig,
    /// Nebula spawn ranges.
    pub nebula: NebulaConfig,
}

/// Star spawn ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarsConfig {
    /// Radius range `[min, max)` in virtual pixels.
    pub radius: [f32; 2],
    /// Largest velocity component, in pixels per frame.
    pub max_speed: f32,
}

/// Nebula spawn ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NebulaConfig {
    /// Radius range `[min, max)` in virtual pixels.
    pub radius: [f32; 2],
    /// Largest velocity component, in pixels per frame.
    pub max_speed: f32,
    /// Blob tints as `#rrggbb` strings.
    pub palette: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. `"info"` or `"spaceapps_background=debug"`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
}

// --- Default implementations ---

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            star_count: 300,
            blob_count: 40,
            twinkle_count: 150,
            seed: None,
            layers: BackgroundLayers::Full,
            speed: AnimationSpeed::Medium,
            cell_width: 8,
            cell_height: 16,
            stars: StarsConfig::default(),
            nebula: NebulaConfig::default(),
        }
    }
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            radius: [0.0, 1.5],
            max_speed: 0.025,
        }
    }
}

impl Default for NebulaConfig {
    fn default() -> Self {
        Self {
            radius: [100.0, 300.0],
            max_speed: 0.01,
            palette: ["#7f00ff", "#ff00ff", "#00ffff", "#ff4500", "#1e90ff"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl StarsConfig {
    /// Radius range, or the default when the configured one is unusable.
    pub fn radius_range(&self) -> [f32; 2] {
        checked_range("stars.radius", self.radius, Self::default().radius)
    }

    /// Speed limit, or the default when the configured one is unusable.
    pub fn speed_limit(&self) -> f32 {
        checked_speed("stars.max_speed", self.max_speed, Self::default().max_speed)
    }
}

impl NebulaConfig {
    /// Radius range, or the default when the configured one is unusable.
    pub fn radius_range(&self) -> [f32; 2] {
        checked_range("nebula.radius", self.radius, Self::default().radius)
    }

    /// Speed limit, or the default when the configured one is unusable.
    pub fn speed_limit(&self) -> f32 {
        checked_speed("nebula.max_speed", self.max_speed, Self::default().max_speed)
    }

    /// Parsed palette. Entries that are not valid hex colors are skipped.
    pub fn palette_colors(&self) -> Vec<Rgba> {
        self.palette
            .iter()
            .filter_map(|hex| {
                let color = Rgba::from_hex(hex);
                if color.is_none() {
                    warn!(color = %hex, "ignoring invalid palette entry");
                }
                color
            })
            .collect()
    }
}

/// A radius range needs finite, ordered, non-negative bounds and a finite span.
fn checked_range(key: &str, range: [f32; 2], fallback: [f32; 2]) -> [f32; 2] {
    let [min, max] = range;
    if min.is_finite() && max.is_finite() && (max - min).is_finite() && 0.0 <= min && min <= max
    {
        range
    } else {
        warn!(key, ?range, "ignoring invalid range, using default");
        fallback
    }
}

/// A speed limit needs a finite symmetric range `[-speed, speed)`.
fn checked_speed(key: &str, speed: f32, fallback: f32) -> f32 {
    if (speed.abs() * 2.0).is_finite() {
        speed.abs()
    } else {
        warn!(key, speed, "ignoring invalid speed, using default");
        fallback
    }
}

// --- Locations ---

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "spaceapps", "spaceapps")
}

impl Config {
    /// Platform config directory, e.g. `~/.config/spaceapps` on Linux.
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        project_dirs()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Platform data directory used for log files.
    pub fn data_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: Config = toml::from_str(&contents).map_err(ConfigError::Parse)?;
            info!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            info!(path = %config_path.display(), "created default config");
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.toml`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let serialized = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::Write)?;
        Ok(())
    }
}

//! Game configuration
//!
//! Every tunable constant of the scaffold lives in `GameConfig`, which is built
//! once at startup and handed to the constructors that need it.
//! Uses RON (Rusty Object Notation) for the optional config file; any field
//! left out of the file keeps its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "canyon_bunny.ron";

/// Environment variable that overrides the config file path
pub const CONFIG_ENV: &str = "CANYON_BUNNY_CONFIG";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Validation error: {0}")]
    Invalid(String),
}

/// Immutable game settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the visible world rectangle (world units)
    pub viewport_width: f32,
    /// Height of the visible world rectangle; kept fixed on resize
    pub viewport_height: f32,
    /// Smallest allowed zoom factor (closest zoom-in)
    pub min_zoom: f32,
    /// Largest allowed zoom factor (farthest zoom-out)
    pub max_zoom: f32,
    /// Sprites spawn in [-spawn_extent, spawn_extent] on both axes
    pub spawn_extent: f32,
    /// Edge length of every test sprite
    pub sprite_size: f32,
    /// Selected-sprite speed (units per second)
    pub sprite_move_speed: f32,
    /// Camera pan speed (units per second)
    pub camera_move_speed: f32,
    /// Zoom change per second
    pub camera_zoom_speed: f32,
    /// Multiplier applied to pan and zoom while the modifier is held
    pub acceleration_factor: f32,
    /// Selected-sprite spin (degrees per second)
    pub rotation_speed: f32,
    /// Background color, RGBA in 0.0-1.0
    pub clear_color: [f32; 4],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 5.0,
            viewport_height: 5.0,
            min_zoom: 0.25,
            max_zoom: 10.0,
            spawn_extent: 2.0,
            sprite_size: 1.0,
            sprite_move_speed: 5.0,
            camera_move_speed: 5.0,
            camera_zoom_speed: 1.0,
            acceleration_factor: 5.0,
            rotation_speed: 90.0,
            // Cornflower blue
            clear_color: [
                0x64 as f32 / 255.0,
                0x95 as f32 / 255.0,
                0xed as f32 / 255.0,
                1.0,
            ],
        }
    }
}

impl GameConfig {
    /// Check that every value is usable by the camera and controller
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("min_zoom", self.min_zoom),
            ("sprite_size", self.sprite_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if !self.max_zoom.is_finite() || self.min_zoom > self.max_zoom {
            return Err(ConfigError::Invalid(format!(
                "zoom range [{}, {}] is empty",
                self.min_zoom, self.max_zoom
            )));
        }

        if !self.spawn_extent.is_finite() || self.spawn_extent < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "spawn_extent must be >= 0, got {}",
                self.spawn_extent
            )));
        }

        let speeds = [
            ("sprite_move_speed", self.sprite_move_speed),
            ("camera_move_speed", self.camera_move_speed),
            ("camera_zoom_speed", self.camera_zoom_speed),
            ("acceleration_factor", self.acceleration_factor),
            ("rotation_speed", self.rotation_speed),
        ];
        for (name, value) in speeds {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{} must be finite", name)));
            }
        }

        if self.clear_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(ConfigError::Invalid(format!(
                "clear_color components must be in 0.0-1.0, got {:?}",
                self.clear_color
            )));
        }

        Ok(())
    }

    /// Parse and validate a config from a RON string
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(target: "GameConfig", "no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

//! Motion configuration resource.
//!
//! Manages the playfield and simulation settings loaded from an INI
//! configuration file. Provides defaults for safe startup and methods to
//! load, validate and save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [playfield]
//! x = 0
//! y = 0
//! width = 320
//! height = 180
//! cell_size = 32
//!
//! [bounds]
//! margin_x = 100
//! margin_y = 100
//!
//! [simulation]
//! tick_rate = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::playfield::{DEFAULT_OUT_OF_BOUNDS_MARGIN, Playfield};

/// Default safe values for startup
const DEFAULT_PLAYFIELD_X: i32 = 0;
const DEFAULT_PLAYFIELD_Y: i32 = 0;
const DEFAULT_PLAYFIELD_WIDTH: i32 = 320;
const DEFAULT_PLAYFIELD_HEIGHT: i32 = 180;
const DEFAULT_CELL_SIZE: i32 = 32;
const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./motion.ini";

/// Motion configuration resource.
///
/// Stores the playfield geometry, the out-of-bounds margins and the fixed
/// tick rate. Call [`MotionConfig::validate`] before building a
/// [`Playfield`] from it; the spatial index assumes a cell size of at least 1.
#[derive(Resource, Debug, Clone)]
pub struct MotionConfig {
    /// Playfield origin X in pixels.
    pub x: i32,
    /// Playfield origin Y in pixels.
    pub y: i32,
    /// Playfield width in pixels.
    pub width: i32,
    /// Playfield height in pixels.
    pub height: i32,
    /// Spatial index cell size in pixels.
    pub cell_size: i32,
    /// Horizontal out-of-bounds margin.
    pub margin_x: i32,
    /// Vertical out-of-bounds margin.
    pub margin_y: i32,
    /// Fixed simulation ticks per second.
    pub tick_rate: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            x: DEFAULT_PLAYFIELD_X,
            y: DEFAULT_PLAYFIELD_Y,
            width: DEFAULT_PLAYFIELD_WIDTH,
            height: DEFAULT_PLAYFIELD_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            margin_x: DEFAULT_OUT_OF_BOUNDS_MARGIN,
            margin_y: DEFAULT_OUT_OF_BOUNDS_MARGIN,
            tick_rate: DEFAULT_TICK_RATE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let get_i32 = |section: &str, key: &str| -> Option<i32> {
            config
                .getint(section, key)
                .ok()
                .flatten()
                .map(|v| v as i32)
        };

        // [playfield] section
        if let Some(x) = get_i32("playfield", "x") {
            self.x = x;
        }
        if let Some(y) = get_i32("playfield", "y") {
            self.y = y;
        }
        if let Some(width) = get_i32("playfield", "width") {
            self.width = width;
        }
        if let Some(height) = get_i32("playfield", "height") {
            self.height = height;
        }
        if let Some(cell_size) = get_i32("playfield", "cell_size") {
            self.cell_size = cell_size;
        }

        // [bounds] section
        if let Some(margin_x) = get_i32("bounds", "margin_x") {
            self.margin_x = margin_x;
        }
        if let Some(margin_y) = get_i32("bounds", "margin_y") {
            self.margin_y = margin_y;
        }

        // [simulation] section
        if let Some(rate) = config.getuint("simulation", "tick_rate").ok().flatten() {
            self.tick_rate = rate as u32;
        }

        info!(
            "Loaded config: playfield ({}, {}) {}x{}, cell={}, margin={}x{}, tick_rate={}",
            self.x,
            self.y,
            self.width,
            self.height,
            self.cell_size,
            self.margin_x,
            self.margin_y,
            self.tick_rate
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [playfield] section
        config.set("playfield", "x", Some(self.x.to_string()));
        config.set("playfield", "y", Some(self.y.to_string()));
        config.set("playfield", "width", Some(self.width.to_string()));
        config.set("playfield", "height", Some(self.height.to_string()));
        config.set("playfield", "cell_size", Some(self.cell_size.to_string()));

        // [bounds] section
        config.set("bounds", "margin_x", Some(self.margin_x.to_string()));
        config.set("bounds", "margin_y", Some(self.margin_y.to_string()));

        // [simulation] section
        config.set("simulation", "tick_rate", Some(self.tick_rate.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Reject settings the motion systems cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.cell_size < 1 {
            return Err(format!("cell_size must be at least 1, got {}", self.cell_size));
        }
        if self.width < 1 || self.height < 1 {
            return Err(format!(
                "playfield must have a positive size, got {}x{}",
                self.width, self.height
            ));
        }
        if self.margin_x < 0 || self.margin_y < 0 {
            return Err(format!(
                "out-of-bounds margins must not be negative, got {}x{}",
                self.margin_x, self.margin_y
            ));
        }
        if self.tick_rate == 0 {
            return Err("tick_rate must be at least 1".to_string());
        }
        Ok(())
    }

    /// Fixed tick duration in seconds.
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }

    /// Playfield described by this configuration.
    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.x, self.y, self.width, self.height, self.cell_size)
            .with_margin(self.margin_x, self.margin_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gridsweep-{}-{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = MotionConfig::new();
        assert!(config.validate().is_ok());
        let field = config.playfield();
        assert_eq!(field.margin_x, 100);
        assert_eq!(field.margin_y, 100);
        assert_eq!(field.cell_size, 32);
    }

    #[test]
    fn test_validate_rejects_zero_cell_size() {
        let mut config = MotionConfig::new();
        config.cell_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_playfield() {
        let mut config = MotionConfig::new();
        config.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = MotionConfig::with_path(temp_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.width, DEFAULT_PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "[playfield]\nwidth = 640\ncell_size = 16\n").unwrap();
        let mut config = MotionConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.width, 640);
        assert_eq!(config.cell_size, 16);
        assert_eq!(config.height, DEFAULT_PLAYFIELD_HEIGHT);
        assert_eq!(config.tick_rate, DEFAULT_TICK_RATE);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved");
        let mut config = MotionConfig::with_path(&path);
        config.x = -16;
        config.margin_y = 40;
        config.tick_rate = 30;
        config.save_to_file().unwrap();

        let mut loaded = MotionConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.x, -16);
        assert_eq!(loaded.margin_y, 40);
        assert_eq!(loaded.tick_rate, 30);
        std::fs::remove_file(&path).ok();
    }
}

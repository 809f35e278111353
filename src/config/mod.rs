//! Configuration file support for minipaint.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/minipaint/config.toml`. Settings include stroke appearance,
//! the canvas frame and touch sampling.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// color = "amber"
/// background = [255, 235, 59]
/// stroke_width = 12.0
/// antialias = true
///
/// [canvas]
/// frame_inset = 40
/// touch_slop = 8.0
/// display_scale = 2.0
/// repaint_on_dropped_move = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Stroke and background appearance
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas frame and input sampling
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke_width`: 1.0 - 64.0
    /// - `frame_inset`: 0 - 500
    /// - `touch_slop`: 0.0 - 64.0
    /// - `display_scale`: 0.25 - 8.0
    fn validate_and_clamp(&mut self) {
        // Stroke width: 1.0 - 64.0
        if !(1.0..=64.0).contains(&self.drawing.stroke_width) {
            warn!(
                "Invalid stroke_width {:.1}, clamping to 1.0-64.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = clamp_or(self.drawing.stroke_width, 1.0, 64.0, 12.0);
        }

        // Frame inset: 0 - 500
        if !(0..=500).contains(&self.canvas.frame_inset) {
            warn!(
                "Invalid frame_inset {}, clamping to 0-500 range",
                self.canvas.frame_inset
            );
            self.canvas.frame_inset = self.canvas.frame_inset.clamp(0, 500);
        }

        // Touch slop: 0.0 - 64.0
        if !(0.0..=64.0).contains(&self.canvas.touch_slop) {
            warn!(
                "Invalid touch_slop {:.1}, clamping to 0.0-64.0 range",
                self.canvas.touch_slop
            );
            self.canvas.touch_slop = clamp_or(self.canvas.touch_slop, 0.0, 64.0, 8.0);
        }

        // Display scale: 0.25 - 8.0
        if !(0.25..=8.0).contains(&self.canvas.display_scale) {
            warn!(
                "Invalid display_scale {:.2}, clamping to 0.25-8.0 range",
                self.canvas.display_scale
            );
            self.canvas.display_scale = clamp_or(self.canvas.display_scale, 0.25, 8.0, 1.0);
        }

        if self.drawing.color.is_unknown_name() {
            warn!(
                "Unknown drawing color {:?}, falling back to 'amber'",
                self.drawing.color
            );
            self.drawing.color = ColorSpec::Name("amber".to_string());
        }

        if self.drawing.background.is_unknown_name() {
            warn!(
                "Unknown background color {:?}, falling back to 'yellow'",
                self.drawing.background
            );
            self.drawing.background = ColorSpec::Name("yellow".to_string());
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/minipaint/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("minipaint");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;
        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();
        Ok(config)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Clamps `value` into `[min, max]`, mapping NaN to `fallback`.
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

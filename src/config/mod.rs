//! Configuration file support for photomark.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/photomark/config.toml`. Settings include the starting tool, color
//! and width, freehand smoothing thresholds, surface size and export destination.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{DrawingConfig, ExportConfig, SmoothingConfig, SurfaceConfig};

use crate::error::SurfaceError;
use crate::input::{Session, Tolerances};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest surface edge accepted from the config, in pixels.
const MAX_SURFACE_EDGE: i32 = 16384;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_thickness = 5.0
/// default_tool = "freehand"
///
/// [smoothing]
/// min_tolerance = 1.0
/// max_tolerance = 100.0
///
/// [surface]
/// width = 1080
/// height = 1920
///
/// [export]
/// save_directory = "~/Pictures/Photomark"
/// filename_template = "draw_%Y%m%d_%H%M%S%3f"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Starting tool, color and stroke width
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Freehand sample filtering thresholds
    #[serde(default)]
    pub smoothing: SmoothingConfig,

    /// Surface size and shape limit
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Where exported images are written
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1.0 - 50.0
    /// - `max_tolerance`: at least 1.0
    /// - `min_tolerance`: 0.0 - `max_tolerance`
    /// - `surface.width` / `surface.height`: 1 - 16384
    fn validate_and_clamp(&mut self) {
        // Thickness: 1.0 - 50.0
        if !(1.0..=50.0).contains(&self.drawing.default_thickness) {
            warn!(
                "Invalid default_thickness {:.1}, clamping to 1.0-50.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = if self.drawing.default_thickness.is_nan() {
                1.0
            } else {
                self.drawing.default_thickness.clamp(1.0, 50.0)
            };
        }

        // Max tolerance first, since it bounds min tolerance
        if !self.smoothing.max_tolerance.is_finite() || self.smoothing.max_tolerance < 1.0 {
            warn!(
                "Invalid max_tolerance {:.1}, must be finite and at least 1.0; using 1.0",
                self.smoothing.max_tolerance
            );
            self.smoothing.max_tolerance = 1.0;
        }

        if !(0.0..=self.smoothing.max_tolerance).contains(&self.smoothing.min_tolerance) {
            warn!(
                "Invalid min_tolerance {:.1}, clamping to 0.0-{:.1} range",
                self.smoothing.min_tolerance, self.smoothing.max_tolerance
            );
            self.smoothing.min_tolerance = if self.smoothing.min_tolerance.is_nan() {
                0.0
            } else {
                self.smoothing
                    .min_tolerance
                    .clamp(0.0, self.smoothing.max_tolerance)
            };
        }

        // Surface size: 1 - 16384
        if !(1..=MAX_SURFACE_EDGE).contains(&self.surface.width) {
            warn!(
                "Invalid surface width {}, clamping to 1-{} range",
                self.surface.width, MAX_SURFACE_EDGE
            );
            self.surface.width = self.surface.width.clamp(1, MAX_SURFACE_EDGE);
        }
        if !(1..=MAX_SURFACE_EDGE).contains(&self.surface.height) {
            warn!(
                "Invalid surface height {}, clamping to 1-{} range",
                self.surface.height, MAX_SURFACE_EDGE
            );
            self.surface.height = self.surface.height.clamp(1, MAX_SURFACE_EDGE);
        }

        if self.export.filename_template.trim().is_empty() {
            warn!("Empty export filename_template, falling back to default");
            self.export.filename_template = ExportConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/photomark/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("photomark");

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

    /// Loads and validates configuration from an explicit file.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema describing the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Freehand filter thresholds from `[smoothing]`.
    pub fn tolerances(&self) -> Tolerances {
        Tolerances {
            min: self.smoothing.min_tolerance,
            max: self.smoothing.max_tolerance,
        }
    }

    /// Session a new edit starts with, from `[drawing]`.
    pub fn initial_session(&self) -> Result<Session, SurfaceError> {
        Session::new(
            self.drawing.default_tool,
            self.drawing.default_color.to_color(),
            self.drawing.default_thickness,
        )
    }
}

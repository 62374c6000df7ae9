//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the session a new edit starts with. The user can change each of
/// these at any time while drawing.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Tool selected when an edit starts (freehand, rectangle, ellipse)
    #[serde(default)]
    pub default_tool: Tool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            default_tool: Tool::default(),
        }
    }
}

/// Freehand sample filtering.
///
/// A pointer sample is dropped when it moved less than `min_tolerance` on both
/// axes, or more than `max_tolerance` on either axis, since the last accepted
/// sample.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SmoothingConfig {
    /// Jitter threshold in model units (valid range: 0.0 - max_tolerance)
    #[serde(default = "default_min_tolerance")]
    pub min_tolerance: f64,

    /// Jump threshold in model units (must be at least 1.0)
    #[serde(default = "default_max_tolerance")]
    pub max_tolerance: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            min_tolerance: default_min_tolerance(),
            max_tolerance: default_max_tolerance(),
        }
    }
}

/// Drawing surface settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Surface width in pixels when no background sets it (valid range: 1 - 16384)
    #[serde(default = "default_surface_width")]
    pub width: i32,

    /// Surface height in pixels when no background sets it (valid range: 1 - 16384)
    #[serde(default = "default_surface_height")]
    pub height: i32,

    /// Maximum number of committed shapes (0 = unlimited)
    #[serde(default)]
    pub max_shapes: usize,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_surface_width(),
            height: default_surface_height(),
            max_shapes: 0,
        }
    }
}

/// Export destination settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported images are written to (supports `~/`)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template using chrono format specifiers; `.png` is appended
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_thickness() -> f64 {
    5.0
}

fn default_min_tolerance() -> f64 {
    1.0
}

fn default_max_tolerance() -> f64 {
    100.0
}

fn default_surface_width() -> i32 {
    1080
}

fn default_surface_height() -> i32 {
    1920
}

fn default_save_directory() -> String {
    dirs::picture_dir()
        .map(|dir| dir.join("Photomark").to_string_lossy().into_owned())
        .unwrap_or_else(|| "~/Pictures/Photomark".to_string())
}

fn default_filename_template() -> String {
    "draw_%Y%m%d_%H%M%S%3f".to_string()
}

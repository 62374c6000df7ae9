//! Utility functions for color names and drag geometry.

use crate::draw::{Color, color::*};
use serde::{Deserialize, Serialize};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and gesture scripts to parse color names.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (0.1 tolerance per channel) and returns
/// "Custom" for anything outside the palette.
pub fn color_to_name(color: &Color) -> &'static str {
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned box in model space, stored as edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Creates bounds from explicit edges.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Normalizes a drag from `(x1, y1)` to `(x2, y2)` into edges.
    ///
    /// The drag may go in any direction; the result always has
    /// `left <= right` and `top <= bottom`.
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            left: x1.min(x2),
            top: y1.min(y2),
            right: x1.max(x2),
            bottom: y1.max(y2),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Center point and radii, as needed to trace an ellipse inside the box.
    pub fn ellipse_params(&self) -> (f64, f64, f64, f64) {
        let rx = self.width() / 2.0;
        let ry = self.height() / 2.0;
        (self.left + rx, self.top + ry, rx, ry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corners_normalizes_any_drag_direction() {
        let forward = Bounds::from_corners(10.0, 10.0, 20.0, 30.0);
        let backward = Bounds::from_corners(20.0, 30.0, 10.0, 10.0);
        assert_eq!(forward, backward);
        assert_eq!(forward, Bounds::new(10.0, 10.0, 20.0, 30.0));
        assert_eq!(forward.width(), 10.0);
        assert_eq!(forward.height(), 20.0);
    }

    #[test]
    fn ellipse_params_compute_center_and_radii() {
        let (cx, cy, rx, ry) = Bounds::new(0.0, 0.0, 10.0, 4.0).ellipse_params();
        assert_eq!((cx, cy, rx, ry), (5.0, 2.0, 5.0, 2.0));
    }

    #[test]
    fn name_color_mappings_round_trip() {
        assert_eq!(name_to_color("WHITE").unwrap(), WHITE);
        assert!(name_to_color("chartreuse").is_none());
        assert_eq!(color_to_name(&RED), "Red");
        assert_eq!(color_to_name(&Color::rgb(0.42, 0.42, 0.42)), "Custom");
    }

    #[test]
    fn every_palette_color_is_opaque_and_named() {
        let palette = [
            ("red", RED),
            ("green", GREEN),
            ("blue", BLUE),
            ("yellow", YELLOW),
            ("orange", ORANGE),
            ("pink", PINK),
            ("white", WHITE),
            ("black", BLACK),
        ];
        for (name, color) in palette {
            assert_eq!(color.a, 1.0, "{name}");
            assert_eq!(name_to_color(name), Some(color));
            assert_eq!(color_to_name(&color).to_lowercase(), name);
        }
    }
}

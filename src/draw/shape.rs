//! Committed annotation shapes.

use super::color::Color;
use super::path::VectorPath;
use serde::{Deserialize, Serialize};

/// A finished stroke: the path plus the color and width it was drawn with.
///
/// Shapes are created once, when a gesture ends, and are read-only from then
/// on. They own their path outright so nothing the stroke builder does later
/// can reach them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    color: Color,
    stroke_width: f64,
    path: VectorPath,
}

impl Shape {
    /// Creates a shape from a path snapshot.
    pub fn new(color: Color, stroke_width: f64, path: VectorPath) -> Self {
        Self {
            color,
            stroke_width,
            path,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Line width in model units.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn path(&self) -> &VectorPath {
        &self.path
    }
}

//! View-to-model coordinate transform.

use super::path::Point;
use crate::error::SurfaceError;

/// Coordinate axis selector for [`ViewTransform::to_model_space`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Translation plus uniform scale between view pixels and model units.
///
/// Pointer input is mapped into model space before it reaches any geometry,
/// so committed shapes do not depend on the current pan or zoom. Rendering
/// goes the other way by applying the transform once to the whole context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    origin_x: f64,
    origin_y: f64,
    scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            scale: 1.0,
        }
    }
}

impl ViewTransform {
    /// Identity transform: origin at (0, 0), scale 1.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.origin_x = x;
        self.origin_y = y;
    }

    /// Sets the zoom factor. Zero, negative and non-finite values are rejected.
    pub fn set_scale(&mut self, scale: f64) -> Result<(), SurfaceError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(SurfaceError::InvalidScale(scale));
        }
        self.scale = scale;
        Ok(())
    }

    /// Maps one view coordinate into model space.
    pub fn to_model_space(&self, coord: f64, axis: Axis) -> f64 {
        let origin = match axis {
            Axis::X => self.origin_x,
            Axis::Y => self.origin_y,
        };
        coord / self.scale - origin / self.scale
    }

    /// Maps a view position into model space on both axes.
    pub fn to_model_point(&self, x: f64, y: f64) -> Point {
        Point::new(
            self.to_model_space(x, Axis::X),
            self.to_model_space(y, Axis::Y),
        )
    }

    /// Applies translate-then-scale to a Cairo context.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.translate(self.origin_x, self.origin_y);
        ctx.scale(self.scale, self.scale);
    }
}

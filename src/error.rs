//! Error type for the drawing surface.

use thiserror::Error;

/// Errors raised by the drawing surface and its session setters.
///
/// Gesture handling itself never fails; these cover invalid setter input
/// and the Cairo calls behind rendering and export.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("View scale must be a positive finite number, got {0}")]
    InvalidScale(f64),

    #[error("Stroke width must be a positive finite number, got {0}")]
    InvalidStrokeWidth(f64),

    #[error("Surface has no pixels ({width}x{height}); call resize first")]
    EmptySurface { width: i32, height: i32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG I/O error: {0}")]
    Png(#[from] cairo::IoError),
}

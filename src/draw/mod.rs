//! Drawing primitives, scene storage and Cairo rendering.
//!
//! This module defines the geometry and paint types behind the surface:
//! - [`Color`]: RGBA color with the default palette
//! - [`VectorPath`] / [`PathCommand`]: replayable stroke geometry
//! - [`Shape`]: a committed path with its color and width
//! - [`Scene`]: ordered store of committed shapes
//! - [`ViewTransform`]: view-to-model coordinate mapping
//! - [`Background`]: the photo underneath, with aspect-fit placement
//! - Rendering functions for Cairo-based output

pub mod background;
pub mod color;
pub mod path;
pub mod render;
pub mod scene;
pub mod shape;
pub mod transform;

pub use background::{Background, aspect_fit};
pub use color::Color;
pub use path::{PathCommand, Point, VectorPath};
pub use render::{render_background, render_base_fill, render_path, render_shape, render_shapes};
pub use scene::Scene;
pub use shape::Shape;
pub use transform::{Axis, ViewTransform};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};

//! The drawing surface: pointer gestures in, composited picture out.

mod pointer;
mod render;
mod state;

pub use state::DrawingSurface;

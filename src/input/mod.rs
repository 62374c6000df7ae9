//! Input handling: tools, session settings, pointer events and the stroke builder.
//!
//! This module turns host pointer events into path geometry. It holds the
//! user's current tool, color and width ([`Session`]) and the per-gesture
//! state machine ([`StrokeBuilder`]).

pub mod events;
pub mod session;
pub mod stroke;
pub mod tool;

pub use events::PointerEvent;
pub use session::Session;
pub use stroke::{StrokeBuilder, StrokeState, Tolerances};
pub use tool::Tool;

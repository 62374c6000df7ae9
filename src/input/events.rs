//! Pointer event types delivered by the host.

/// A pointer event in view coordinates.
///
/// Every event carries the number of pointers currently touching the
/// surface. Only single-pointer events are acted on; anything else is
/// treated as a multi-touch gesture and ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer went down at (x, y)
    Down { x: f64, y: f64, pointer_count: u32 },
    /// Pointer moved to (x, y) while down
    Move { x: f64, y: f64, pointer_count: u32 },
    /// Pointer lifted
    Up { pointer_count: u32 },
}

impl PointerEvent {
    pub fn pointer_count(&self) -> u32 {
        match *self {
            PointerEvent::Down { pointer_count, .. }
            | PointerEvent::Move { pointer_count, .. }
            | PointerEvent::Up { pointer_count } => pointer_count,
        }
    }

    /// Whether this event belongs to a single-pointer gesture.
    pub fn is_single_pointer(&self) -> bool {
        self.pointer_count() == 1
    }
}

use crate::input::{PointerEvent, Session};
use log::{debug, warn};

use super::DrawingSurface;

impl DrawingSurface {
    /// Processes one pointer event from the host.
    ///
    /// # Behavior
    /// - Events with more than one active pointer are ignored entirely
    /// - Down: starts a gesture with the session's tool at the mapped point
    /// - Move: extends the active gesture; ignored while idle
    /// - Up: commits the gesture as a shape with the session's color and
    ///   width; ignored while idle
    pub fn handle_pointer_event(&mut self, session: &Session, event: PointerEvent) {
        if !event.is_single_pointer() {
            debug!(
                "Ignoring {} pointer event ({} pointers)",
                match event {
                    PointerEvent::Down { .. } => "down",
                    PointerEvent::Move { .. } => "move",
                    PointerEvent::Up { .. } => "up",
                },
                event.pointer_count()
            );
            return;
        }

        match event {
            PointerEvent::Down { x, y, .. } => {
                let point = self.transform.to_model_point(x, y);
                self.stroke.begin(point, session.tool());
                self.request_redraw();
            }
            PointerEvent::Move { x, y, .. } => {
                let point = self.transform.to_model_point(x, y);
                if self.stroke.extend(point) {
                    self.request_redraw();
                }
            }
            PointerEvent::Up { .. } => {
                let Some(shape) = self.stroke.end(session.color(), session.stroke_width()) else {
                    return;
                };
                if !self.scene.try_append(shape, self.max_shapes) {
                    warn!(
                        "Shape limit ({}) reached; discarding new shape",
                        self.max_shapes
                    );
                }
                self.request_redraw();
            }
        }
    }

    /// Single-pointer press at view position (x, y).
    pub fn pointer_down(&mut self, session: &Session, x: f64, y: f64) {
        self.handle_pointer_event(
            session,
            PointerEvent::Down {
                x,
                y,
                pointer_count: 1,
            },
        );
    }

    /// Single-pointer drag to view position (x, y).
    pub fn pointer_move(&mut self, session: &Session, x: f64, y: f64) {
        self.handle_pointer_event(
            session,
            PointerEvent::Move {
                x,
                y,
                pointer_count: 1,
            },
        );
    }

    /// Single-pointer release.
    pub fn pointer_up(&mut self, session: &Session) {
        self.handle_pointer_event(session, PointerEvent::Up { pointer_count: 1 });
    }
}

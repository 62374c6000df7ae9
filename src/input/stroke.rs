//! Stroke builder: turns one gesture into one vector path.

use super::tool::Tool;
use crate::draw::{Color, Point, Shape, VectorPath};
use crate::util::Bounds;
use log::debug;

/// Sample filtering thresholds for freehand strokes, in model units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Samples closer than this to the previous one (on both axes) are jitter.
    pub min: f64,
    /// Samples farther than this from the previous one (on either axis) are
    /// treated as spurious jumps.
    pub max: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 100.0,
        }
    }
}

/// Gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeState {
    /// No gesture in progress
    Idle,
    /// Pointer is down and geometry is being built
    Active {
        /// Tool fixed at gesture start
        tool: Tool,
        /// Model-space point where the gesture began
        start: Point,
        /// Last accepted freehand sample
        last: Point,
    },
}

/// Builds the in-progress path for the current gesture.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    state: StrokeState,
    path: VectorPath,
    tolerances: Tolerances,
}

impl Default for StrokeBuilder {
    fn default() -> Self {
        Self::new(Tolerances::default())
    }
}

impl StrokeBuilder {
    pub fn new(tolerances: Tolerances) -> Self {
        Self {
            state: StrokeState::Idle,
            path: VectorPath::new(),
            tolerances,
        }
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, StrokeState::Active { .. })
    }

    /// The path being drawn; empty between gestures.
    pub fn path(&self) -> &VectorPath {
        &self.path
    }

    pub fn tolerances(&self) -> Tolerances {
        self.tolerances
    }

    /// Starts a gesture at `point` (already in model space).
    ///
    /// Any uncommitted geometry from a gesture whose pointer-up never arrived
    /// is thrown away here.
    pub fn begin(&mut self, point: Point, tool: Tool) {
        if self.is_active() {
            debug!("Discarding unfinished gesture");
        }
        self.path.reset();
        self.path.move_to(point);
        self.state = StrokeState::Active {
            tool,
            start: point,
            last: point,
        };
    }

    /// Feeds the next pointer sample. Returns `true` if the path changed.
    ///
    /// Does nothing when no gesture is active. Freehand samples are measured
    /// against the previous sample, accepted or not.
    pub fn extend(&mut self, point: Point) -> bool {
        let StrokeState::Active { tool, start, last } = &mut self.state else {
            return false;
        };

        match tool {
            Tool::Freehand => {
                let dx = (point.x - last.x).abs();
                let dy = (point.y - last.y).abs();
                let previous = std::mem::replace(last, point);
                if dx.max(dy) < self.tolerances.min {
                    return false;
                }
                if dx > self.tolerances.max || dy > self.tolerances.max {
                    debug!("Rejected freehand jump of ({dx:.1}, {dy:.1})");
                    return false;
                }
                // Curve through the previous sample towards the midpoint; the
                // next segment picks up from there, which keeps the joins smooth.
                self.path.quad_to(previous, previous.midpoint(point));
            }
            Tool::Rectangle => {
                let bounds = Bounds::from_corners(start.x, start.y, point.x, point.y);
                self.path.reset();
                self.path.add_rect(bounds);
            }
            Tool::Ellipse => {
                let bounds = Bounds::from_corners(start.x, start.y, point.x, point.y);
                self.path.reset();
                self.path.add_ellipse(bounds);
            }
        }
        true
    }

    /// Finishes the gesture and snapshots the path into a shape.
    ///
    /// Returns `None` when no gesture is active.
    pub fn end(&mut self, color: Color, stroke_width: f64) -> Option<Shape> {
        let StrokeState::Active { tool, .. } = self.state else {
            return None;
        };
        let shape = Shape::new(color, stroke_width, self.path.clone());
        debug!(
            "{} gesture finished with {} path commands",
            tool.label(),
            self.path.len()
        );
        self.path.reset();
        self.state = StrokeState::Idle;
        Some(shape)
    }

    /// Drops the gesture and its geometry without producing a shape.
    pub fn cancel(&mut self) {
        self.path.reset();
        self.state = StrokeState::Idle;
    }
}

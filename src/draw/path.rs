//! Vector path geometry recorded by the stroke builder.

use crate::util::Bounds;
use serde::{Deserialize, Serialize};

/// A point in model space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// One drawing instruction of a [`VectorPath`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Starts a new sub-path at the given point.
    MoveTo(Point),
    /// Quadratic Bézier from the current point through `ctrl` to `to`.
    QuadTo { ctrl: Point, to: Point },
    /// Closed rectangle outline.
    Rect(Bounds),
    /// Closed ellipse outline inscribed in the bounds.
    Ellipse(Bounds),
}

/// Ordered list of path commands.
///
/// Cloning produces an independent structural copy, which is what lets a
/// committed shape outlive later edits to the live path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorPath {
    commands: Vec<PathCommand>,
}

impl VectorPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all geometry.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
    }

    pub fn add_rect(&mut self, bounds: Bounds) {
        self.commands.push(PathCommand::Rect(bounds));
    }

    pub fn add_ellipse(&mut self, bounds: Bounds) {
        self.commands.push(PathCommand::Ellipse(bounds));
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_is_independent_of_later_edits() {
        let mut live = VectorPath::new();
        live.move_to(Point::new(1.0, 1.0));
        let snapshot = live.clone();

        live.quad_to(Point::new(1.0, 1.0), Point::new(3.0, 3.0));
        live.reset();

        assert!(live.is_empty());
        assert_eq!(snapshot.len(), 1);
        assert_eq!(
            snapshot.commands()[0],
            PathCommand::MoveTo(Point::new(1.0, 1.0))
        );
    }

    #[test]
    fn midpoint_averages_coordinates() {
        let mid = Point::new(0.0, 10.0).midpoint(Point::new(4.0, 20.0));
        assert_eq!(mid, Point::new(2.0, 15.0));
    }
}

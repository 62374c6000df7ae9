//! Scene store: the ordered list of committed shapes.

use super::shape::Shape;

/// All shapes committed on the current background.
///
/// Insertion order is paint order: the first shape is the bottom layer and
/// the last one is drawn on top. The list only grows by appending and only
/// shrinks through [`Scene::remove_last`] or [`Scene::clear`].
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Adds a shape on top of the existing ones.
    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Attempts to add a shape, enforcing a maximum shape count when `max` > 0.
    ///
    /// Returns `true` if the shape was added, `false` if the limit would be exceeded.
    pub fn try_append(&mut self, shape: Shape, max: usize) -> bool {
        if max == 0 || self.shapes.len() < max {
            self.shapes.push(shape);
            true
        } else {
            false
        }
    }

    /// Removes and returns the newest shape; does nothing on an empty scene.
    pub fn remove_last(&mut self) -> Option<Shape> {
        self.shapes.pop()
    }

    /// Removes every shape.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Iterates oldest to newest, i.e. in paint order.
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

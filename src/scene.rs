//! An ordered collection of shapes, in paint order.

use crate::clip::clip;
use crate::errors::SceneError;
use crate::shape::Shape;
use crate::types::Pixel;

/// Shapes in insertion order; later shapes paint over earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top and return its index.
    pub fn push(&mut self, shape: Shape) -> usize {
        crate::log::debug!(kind = ?shape.kind(), index = self.shapes.len(), "added shape");
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Shape at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Mutable shape at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    /// Remove and return the shape at `index`; later shapes shift down.
    pub fn remove(&mut self, index: usize) -> Result<Shape, SceneError> {
        if index >= self.shapes.len() {
            return Err(SceneError::NoSuchShape {
                index,
                len: self.shapes.len(),
            });
        }
        crate::log::debug!(index, "removed shape");
        Ok(self.shapes.remove(index))
    }

    /// Index of the first shape, in insertion order, whose raster is within
    /// the hit radius of `point`.
    pub fn pick(&self, point: Pixel) -> Option<usize> {
        self.shapes.iter().position(|s| s.hit_test(point))
    }

    /// Clip every shape to the rectangle spanned by two corners and commit
    /// the result.
    pub fn clip_all(&mut self, corner_a: Pixel, corner_b: Pixel) {
        for shape in &mut self.shapes {
            let points = clip(shape, corner_a, corner_b);
            shape.set_control_points(points);
        }
    }

    /// Shapes in paint order, bottom first.
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the scene holds no shapes.
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

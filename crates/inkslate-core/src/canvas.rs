//! Shape collection and selection state.

use crate::config::SelectionPolicy;
use crate::geometry::{is_usable_radius, union_bounds};
use crate::shapes::Shape;
use kurbo::{Point, Rect, Vec2};

/// The ordered set of shapes on the whiteboard.
///
/// Insertion order is draw order: later shapes paint over earlier ones.
/// Shapes have no identity beyond their position, and removal is a filter
/// that reports which positions went away.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    shapes: Vec<Shape>,
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top and return its index.
    pub fn add_shape(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Shapes in draw order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    /// Remove all shapes.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Get the bounding box of all shapes. Empty strokes have no extent and
    /// are skipped.
    pub fn bounds(&self) -> Option<Rect> {
        union_bounds(
            self.shapes
                .iter()
                .filter(|s| !s.is_empty())
                .map(Shape::bounds),
        )
    }

    /// Indices of shapes under a point, front to back.
    pub fn shapes_at_point(&self, point: Point, tolerance: f64) -> Vec<usize> {
        self.shapes
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, s)| s.contains_point(point, tolerance))
            .map(|(i, _)| i)
            .collect()
    }

    /// Set every shape's selection flag from a query rectangle.
    /// Returns the number of selected shapes.
    pub fn select_in_rect(&mut self, rect: Rect, policy: SelectionPolicy) -> usize {
        let rect = rect.abs();
        let mut count = 0;
        for shape in &mut self.shapes {
            let hit = shape.matches_selection(rect, policy);
            shape.set_selected(hit);
            count += usize::from(hit);
        }
        count
    }

    /// Mark every shape selected.
    pub fn select_all(&mut self) {
        for shape in &mut self.shapes {
            shape.set_selected(true);
        }
    }

    /// Clear every selection flag without removing anything.
    pub fn clear_selection(&mut self) {
        for shape in &mut self.shapes {
            shape.set_selected(false);
        }
    }

    /// Currently selected shapes in draw order.
    pub fn selected(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| s.is_selected())
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.shapes
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_selected())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    /// Translate every selected shape. Returns how many moved.
    pub fn move_selected(&mut self, delta: Vec2) -> usize {
        let mut moved = 0;
        for shape in self.shapes.iter_mut().filter(|s| s.is_selected()) {
            shape.move_by(delta);
            moved += 1;
        }
        moved
    }

    /// Remove every selected shape. Returns the removed indices.
    pub fn delete_selected(&mut self) -> Vec<usize> {
        self.retain_indexed(|s| !s.is_selected())
    }

    /// Remove every shape that contains `point`. Returns the removed indices.
    pub fn erase_at(&mut self, point: Point, tolerance: f64) -> Vec<usize> {
        self.retain_indexed(|s| !s.contains_point(point, tolerance))
    }

    /// Remove stroke points within `radius` of `point`, dropping strokes that
    /// end up empty. Rectangles and circles containing `point` are removed.
    /// Returns the indices of shapes removed entirely. A NaN, infinite or
    /// negative radius erases nothing.
    pub fn erase_points(&mut self, point: Point, radius: f64, tolerance: f64) -> Vec<usize> {
        if !is_usable_radius(radius) {
            return Vec::new();
        }
        for shape in &mut self.shapes {
            if let Shape::Freehand(f) = shape {
                f.erase_points(point, radius);
            }
        }
        self.retain_indexed(|s| match s {
            Shape::Freehand(f) => !f.is_empty(),
            other => !other.contains_point(point, tolerance),
        })
    }

    /// Keep shapes matching `keep`, preserving order. Returns the pre-removal
    /// indices of removed shapes in ascending order.
    fn retain_indexed(&mut self, mut keep: impl FnMut(&Shape) -> bool) -> Vec<usize> {
        let mut removed = Vec::new();
        let mut index = 0;
        self.shapes.retain(|s| {
            let kept = keep(s);
            if !kept {
                removed.push(index);
            }
            index += 1;
            kept
        });
        removed
    }
}

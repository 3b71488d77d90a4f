//! Freehand drawing shape.

use super::{ShapeStyle, ShapeTrait, draw_highlight};
use crate::draw::{DrawContext, HighlightStyle, LineCap, LineJoin};
use crate::geometry::{is_usable_radius, point_to_line_distance, polyline_intersects_rect};
use kurbo::{BezPath, Point, Rect, Vec2};

/// A freehand stroke (series of points joined by straight segments).
#[derive(Debug, Clone, PartialEq)]
pub struct Freehand {
    /// Points in drawing order.
    pub points: Vec<Point>,
    /// Style properties.
    pub style: ShapeStyle,
    /// Selection state.
    pub selected: bool,
}

impl Freehand {
    /// Start a stroke at a single point.
    pub fn new(start: Point, style: ShapeStyle) -> Self {
        Self {
            points: vec![start],
            style,
            selected: false,
        }
    }

    /// Create from existing points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            points,
            style: ShapeStyle::default(),
            selected: false,
        }
    }

    /// Add a point to the path.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Remove every point strictly within `radius` of `center`.
    /// Returns how many points were removed. A NaN, infinite or negative
    /// radius removes nothing.
    pub fn erase_points(&mut self, center: Point, radius: f64) -> usize {
        if !is_usable_radius(radius) {
            return 0;
        }
        let before = self.points.len();
        self.points.retain(|p| p.distance(center) >= radius);
        before - self.points.len()
    }

    /// Move-then-line-to path through the points.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(first) = self.points.first() else {
            return path;
        };
        path.move_to(*first);
        for point in self.points.iter().skip(1) {
            path.line_to(*point);
        }
        path
    }
}

impl ShapeTrait for Freehand {
    fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };

        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x;
        let mut max_y = first.y;

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Rect::new(min_x, min_y, max_x, max_y)
    }

    fn contains_point(&self, point: Point, tolerance: f64) -> bool {
        if let [only] = self.points.as_slice() {
            return point.distance(*only) < tolerance;
        }
        self.points
            .windows(2)
            .any(|w| point_to_line_distance(point, w[0], w[1]) < tolerance)
    }

    fn move_by(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }

    fn draw<C: DrawContext + ?Sized>(&self, ctx: &mut C, highlight: &HighlightStyle) {
        let Some(first) = self.points.first() else {
            return;
        };

        ctx.begin_path();
        self.style.apply(ctx);
        ctx.set_line_cap(LineCap::Round);
        ctx.set_line_join(LineJoin::Round);

        ctx.move_to(first.x, first.y);
        for point in self.points.iter().skip(1) {
            ctx.line_to(point.x, point.y);
        }
        ctx.stroke();

        if self.selected {
            draw_highlight(ctx, self.bounds(), highlight);
        }
    }

    fn intersects_rect(&self, rect: Rect) -> bool {
        polyline_intersects_rect(&self.points, rect)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

//! Rectangle shape.

use super::{ShapeStyle, ShapeTrait, draw_highlight};
use crate::draw::{DrawContext, HighlightStyle};
use crate::geometry::{rect_contains_point_inclusive, rects_overlap_inclusive};
use kurbo::{Point, Rect, Vec2};

/// An axis-aligned rectangle outline.
///
/// `origin` is the corner where drawing started. `width` and `height` are
/// signed so the rectangle can be dragged out in any direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// Anchor corner.
    pub origin: Point,
    /// Signed horizontal extent from the anchor.
    pub width: f64,
    /// Signed vertical extent from the anchor.
    pub height: f64,
    /// Style properties.
    pub style: ShapeStyle,
    /// Selection state.
    pub selected: bool,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
            style: ShapeStyle::default(),
            selected: false,
        }
    }

    /// Create a zero-size rectangle anchored at `origin`.
    pub fn seeded(origin: Point, style: ShapeStyle) -> Self {
        Self {
            style,
            ..Self::new(origin, 0.0, 0.0)
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self::new(p1, p2.x - p1.x, p2.y - p1.y)
    }

    /// Move the far corner to `corner`, keeping the anchor fixed.
    pub fn resize_to(&mut self, corner: Point) {
        self.width = corner.x - self.origin.x;
        self.height = corner.y - self.origin.y;
    }

    /// Get the rectangle as a normalized kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
        .abs()
    }
}

impl ShapeTrait for Rectangle {
    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn contains_point(&self, point: Point, _tolerance: f64) -> bool {
        rect_contains_point_inclusive(self.as_rect(), point)
    }

    fn move_by(&mut self, delta: Vec2) {
        self.origin += delta;
    }

    fn draw<C: DrawContext + ?Sized>(&self, ctx: &mut C, highlight: &HighlightStyle) {
        let rect = self.as_rect();
        self.style.apply(ctx);
        ctx.stroke_rect(rect.x0, rect.y0, rect.width(), rect.height());

        if self.selected {
            draw_highlight(ctx, rect, highlight);
        }
    }

    fn intersects_rect(&self, rect: Rect) -> bool {
        rects_overlap_inclusive(self.as_rect(), rect)
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

//! Circle shape.

use super::{ShapeStyle, ShapeTrait, draw_highlight};
use crate::draw::{DrawContext, HighlightStyle};
use crate::geometry::rects_overlap_inclusive;
use kurbo::{Point, Rect, Vec2};
use std::f64::consts::TAU;

/// A circle outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius, never negative.
    pub radius: f64,
    /// Style properties.
    pub style: ShapeStyle,
    /// Selection state.
    pub selected: bool,
}

impl Circle {
    /// Create a new circle. Negative or NaN radii are clamped to zero.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: clamp_radius(radius),
            style: ShapeStyle::default(),
            selected: false,
        }
    }

    /// Create a zero-radius circle at `center`.
    pub fn seeded(center: Point, style: ShapeStyle) -> Self {
        Self {
            style,
            ..Self::new(center, 0.0)
        }
    }

    /// Set the radius to the distance from the center to `point`.
    pub fn resize_to(&mut self, point: Point) {
        self.radius = clamp_radius(self.center.distance(point));
    }
}

fn clamp_radius(radius: f64) -> f64 {
    if radius > 0.0 { radius } else { 0.0 }
}

impl ShapeTrait for Circle {
    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    fn contains_point(&self, point: Point, _tolerance: f64) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    fn move_by(&mut self, delta: Vec2) {
        self.center += delta;
    }

    fn draw<C: DrawContext + ?Sized>(&self, ctx: &mut C, highlight: &HighlightStyle) {
        ctx.begin_path();
        self.style.apply(ctx);
        ctx.arc(self.center.x, self.center.y, self.radius, 0.0, TAU);
        ctx.stroke();

        if self.selected {
            draw_highlight(ctx, self.bounds(), highlight);
        }
    }

    fn intersects_rect(&self, rect: Rect) -> bool {
        rects_overlap_inclusive(self.bounds(), rect)
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

//! Shape definitions for the whiteboard.

mod circle;
mod freehand;
mod rectangle;

pub use circle::Circle;
pub use freehand::Freehand;
pub use rectangle::Rectangle;

use crate::config::SelectionPolicy;
use crate::draw::{DrawContext, HighlightStyle};
use crate::geometry::rect_contains_rect;
use crate::tools::ToolKind;
use kurbo::{Point, Rect, Vec2};

/// Default stroke color for new shapes.
pub const DEFAULT_COLOR: &str = "#000000";
/// Default stroke width for new shapes.
pub const DEFAULT_THICKNESS: f64 = 2.0;
/// Pixel distance within which a point counts as touching a stroke.
pub const HIT_TOLERANCE: f64 = 5.0;

/// Style properties shared by every shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    /// Stroke color, passed to the drawing surface as-is.
    pub color: String,
    /// Stroke width in pixels. Always greater than zero.
    pub thickness: f64,
}

impl ShapeStyle {
    pub fn new(color: impl Into<String>, thickness: f64) -> Self {
        Self {
            color: color.into(),
            thickness,
        }
    }

    /// Apply this style's stroke settings to a context.
    pub(crate) fn apply<C: DrawContext + ?Sized>(&self, ctx: &mut C) {
        ctx.set_stroke_style(&self.color);
        ctx.set_line_width(self.thickness);
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR, DEFAULT_THICKNESS)
    }
}

/// Behavior every shape variant provides.
pub trait ShapeTrait {
    /// Axis-aligned bounding box with non-negative extents.
    fn bounds(&self) -> Rect;

    /// Check if a point hits this shape.
    fn contains_point(&self, point: Point, tolerance: f64) -> bool;

    /// Translate every coordinate the shape owns.
    fn move_by(&mut self, delta: Vec2);

    /// Emit draw calls for this shape, plus the highlight outline when selected.
    fn draw<C: DrawContext + ?Sized>(&self, ctx: &mut C, highlight: &HighlightStyle);

    /// Whether the shape touches the given selection rectangle.
    fn intersects_rect(&self, rect: Rect) -> bool;

    fn style(&self) -> &ShapeStyle;

    fn style_mut(&mut self) -> &mut ShapeStyle;

    fn is_selected(&self) -> bool;

    fn set_selected(&mut self, selected: bool);
}

/// Draw the selection outline around `bounds`.
pub(crate) fn draw_highlight<C: DrawContext + ?Sized>(
    ctx: &mut C,
    bounds: Rect,
    highlight: &HighlightStyle,
) {
    let m = highlight.margin;
    ctx.set_stroke_style(&highlight.color);
    ctx.set_line_width(highlight.width);
    ctx.stroke_rect(
        bounds.x0 - m,
        bounds.y0 - m,
        bounds.width() + 2.0 * m,
        bounds.height() + 2.0 * m,
    );
}

/// A drawable whiteboard element.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Freehand(Freehand),
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    /// The tool that produces this kind of shape.
    pub fn kind(&self) -> ToolKind {
        match self {
            Shape::Freehand(_) => ToolKind::Freehand,
            Shape::Rectangle(_) => ToolKind::Rectangle,
            Shape::Circle(_) => ToolKind::Circle,
        }
    }

    /// Whether the shape has no geometry. Only a stroke with no points is
    /// empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Shape::Freehand(f) => f.is_empty(),
            Shape::Rectangle(_) | Shape::Circle(_) => false,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Freehand(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
        }
    }

    pub fn contains_point(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Shape::Freehand(s) => s.contains_point(point, tolerance),
            Shape::Rectangle(s) => s.contains_point(point, tolerance),
            Shape::Circle(s) => s.contains_point(point, tolerance),
        }
    }

    pub fn move_by(&mut self, delta: Vec2) {
        match self {
            Shape::Freehand(s) => s.move_by(delta),
            Shape::Rectangle(s) => s.move_by(delta),
            Shape::Circle(s) => s.move_by(delta),
        }
    }

    pub fn draw<C: DrawContext + ?Sized>(&self, ctx: &mut C, highlight: &HighlightStyle) {
        match self {
            Shape::Freehand(s) => s.draw(ctx, highlight),
            Shape::Rectangle(s) => s.draw(ctx, highlight),
            Shape::Circle(s) => s.draw(ctx, highlight),
        }
    }

    pub fn intersects_rect(&self, rect: Rect) -> bool {
        match self {
            Shape::Freehand(s) => s.intersects_rect(rect),
            Shape::Rectangle(s) => s.intersects_rect(rect),
            Shape::Circle(s) => s.intersects_rect(rect),
        }
    }

    /// Whether the shape's bounds lie entirely within `rect`.
    pub fn contained_in(&self, rect: Rect) -> bool {
        rect_contains_rect(rect, self.bounds())
    }

    /// Evaluate this shape against a selection rectangle under `policy`.
    pub fn matches_selection(&self, rect: Rect, policy: SelectionPolicy) -> bool {
        match policy {
            SelectionPolicy::Intersects => self.intersects_rect(rect),
            SelectionPolicy::Contains => self.contained_in(rect),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Freehand(s) => s.style(),
            Shape::Rectangle(s) => s.style(),
            Shape::Circle(s) => s.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Freehand(s) => s.style_mut(),
            Shape::Rectangle(s) => s.style_mut(),
            Shape::Circle(s) => s.style_mut(),
        }
    }

    pub fn is_selected(&self) -> bool {
        match self {
            Shape::Freehand(s) => s.is_selected(),
            Shape::Rectangle(s) => s.is_selected(),
            Shape::Circle(s) => s.is_selected(),
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        match self {
            Shape::Freehand(s) => s.set_selected(selected),
            Shape::Rectangle(s) => s.set_selected(selected),
            Shape::Circle(s) => s.set_selected(selected),
        }
    }

    /// Get the freehand stroke if this shape is one.
    pub fn as_freehand(&self) -> Option<&Freehand> {
        match self {
            Shape::Freehand(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Shape::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            _ => None,
        }
    }
}

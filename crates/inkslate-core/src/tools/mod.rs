//! Tool system for the whiteboard.

use crate::error::{WhiteboardError, WhiteboardResult, validate_thickness};
use crate::shapes::{Circle, Freehand, Rectangle, Shape, ShapeStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available drawing tools.
///
/// The numeric values are the ones hosts pass across the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolKind {
    #[default]
    Freehand = 0,
    Rectangle = 1,
    Circle = 2,
    /// Reserved; produces no shape.
    Line = 3,
    /// Reserved; produces no shape.
    Triangle = 4,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Freehand,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Line,
        ToolKind::Triangle,
    ];

    /// Upper-case name used by hosts.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Freehand => "FREEHAND",
            ToolKind::Rectangle => "RECTANGLE",
            ToolKind::Circle => "CIRCLE",
            ToolKind::Line => "LINE",
            ToolKind::Triangle => "TRIANGLE",
        }
    }

    /// Whether this tool creates shapes.
    pub fn is_implemented(self) -> bool {
        matches!(
            self,
            ToolKind::Freehand | ToolKind::Rectangle | ToolKind::Circle
        )
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for ToolKind {
    type Error = WhiteboardError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        ToolKind::ALL
            .into_iter()
            .find(|tool| *tool as u32 == value)
            .ok_or(WhiteboardError::UnknownTool(value))
    }
}

impl FromStr for ToolKind {
    type Err = WhiteboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ToolKind::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| WhiteboardError::UnknownToolName(s.to_string()))
    }
}

/// Manages the current tool and the style applied to new shapes.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Current style to apply to new shapes.
    pub current_style: ShapeStyle,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new(tool: ToolKind, style: ShapeStyle) -> Self {
        Self {
            current_tool: tool,
            current_style: style,
        }
    }

    /// Set the current tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.current_style.color = color.into();
    }

    /// Set the stroke width for new shapes, rejecting non-positive values.
    pub fn set_thickness(&mut self, thickness: f64) -> WhiteboardResult<()> {
        self.current_style.thickness = validate_thickness(thickness)?;
        Ok(())
    }

    /// Seed a new shape of the current tool at `start`.
    ///
    /// Returns `None` for reserved tools.
    pub fn begin_shape(&self, start: Point) -> Option<Shape> {
        let style = self.current_style.clone();
        match self.current_tool {
            ToolKind::Freehand => Some(Shape::Freehand(Freehand::new(start, style))),
            ToolKind::Rectangle => Some(Shape::Rectangle(Rectangle::seeded(start, style))),
            ToolKind::Circle => Some(Shape::Circle(Circle::seeded(start, style))),
            ToolKind::Line | ToolKind::Triangle => None,
        }
    }
}

/// Grow an in-progress shape toward `point`.
///
/// The rule follows the shape's own variant, not the current tool, so a tool
/// change mid-drag cannot corrupt the shape being drawn.
pub fn extend_shape(shape: &mut Shape, point: Point) {
    match shape {
        Shape::Freehand(f) => f.add_point(point),
        Shape::Rectangle(r) => r.resize_to(point),
        Shape::Circle(c) => c.resize_to(point),
    }
}

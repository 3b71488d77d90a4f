//! Drawing-context capability consumed by shapes.
//!
//! The methods mirror the subset of the HTML canvas 2D API the whiteboard
//! needs. Implementations forward to a real surface or record the calls.

use serde::{Deserialize, Serialize};

/// Line cap style for stroked paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    /// Canvas keyword for this cap.
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Line join style for stroked paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    /// Canvas keyword for this join.
    pub fn as_str(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// A 2D drawing surface.
///
/// Colors are opaque strings (e.g. CSS hex) passed straight to the surface.
pub trait DrawContext {
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Add a circular arc; angles are in radians.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke(&mut self);
    /// Set the dash pattern; an empty slice restores solid lines.
    fn set_line_dash(&mut self, segments: &[f64]);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);
}

/// Outline drawn around selected shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightStyle {
    /// Outline color.
    pub color: String,
    /// Outline width in pixels.
    pub width: f64,
    /// Gap between the shape bounds and the outline.
    pub margin: f64,
}

impl HighlightStyle {
    pub const DEFAULT_COLOR: &'static str = "#0095ff";
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            color: Self::DEFAULT_COLOR.to_string(),
            width: 2.0,
            margin: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(LineCap::Round.as_str(), "round");
        assert_eq!(LineJoin::Round.as_str(), "round");
        assert_eq!(LineCap::default().as_str(), "butt");
    }

    #[test]
    fn test_default_highlight() {
        let h = HighlightStyle::default();
        assert_eq!(h.color, "#0095ff");
        assert!((h.width - 2.0).abs() < f64::EPSILON);
        assert!((h.margin - 5.0).abs() < f64::EPSILON);
    }
}
